use crate::commands::{print_json, print_lines, Context};
use crate::util::collect_inputs;
use anyhow::Result;
use clap::Args;
use dokan_core::normalize_phone;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Phone numbers to normalize; read from --file or stdin when omitted
    pub inputs: Vec<String>,
    /// Read one phone number per line from this file
    #[arg(long, conflicts_with = "inputs")]
    pub file: Option<PathBuf>,
    /// Cap results at the local number length
    #[arg(long, conflicts_with = "no_truncate")]
    pub truncate: bool,
    /// Keep every digit
    #[arg(long)]
    pub no_truncate: bool,
}

#[derive(Debug, Serialize)]
struct NormalizedDto {
    input: String,
    normalized: String,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let truncate = resolve_truncate(&args, ctx.config.phone.truncate);
    debug!(truncate, "normalizing phone numbers");

    let inputs = collect_inputs(args.inputs, args.file.as_deref())?;
    let items: Vec<NormalizedDto> = inputs
        .into_iter()
        .map(|input| {
            let normalized = normalize_phone(&input, truncate);
            NormalizedDto { input, normalized }
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }
    print_lines(items.iter().map(|item| item.normalized.as_str()))
}

fn resolve_truncate(args: &NormalizeArgs, default: bool) -> bool {
    if args.truncate {
        true
    } else if args.no_truncate {
        false
    } else {
        default
    }
}
