use crate::commands::{print_json, print_lines, Context};
use crate::util::collect_inputs;
use anyhow::Result;
use clap::Args;
use dokan_core::convert_digits;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConvertDigitsArgs {
    /// Text to convert; read from --file or stdin when omitted
    pub inputs: Vec<String>,
    /// Read one value per line from this file
    #[arg(long, conflicts_with = "inputs")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ConvertedDto {
    input: String,
    converted: String,
}

pub fn convert(ctx: &Context<'_>, args: ConvertDigitsArgs) -> Result<()> {
    let inputs = collect_inputs(args.inputs, args.file.as_deref())?;
    let items: Vec<ConvertedDto> = inputs
        .into_iter()
        .map(|input| {
            let converted = convert_digits(&input);
            ConvertedDto { input, converted }
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }
    print_lines(items.iter().map(|item| item.converted.as_str()))
}
