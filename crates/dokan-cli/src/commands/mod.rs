use anyhow::Result;
use dokan_config::AppConfig;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod digits;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}
