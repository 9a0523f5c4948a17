use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{invalid_input, not_found};

/// Collects inputs from positional values, a file, or stdin, in that order of
/// preference. File and stdin contents are split into lines.
pub fn collect_inputs(values: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if !values.is_empty() {
        debug!(count = values.len(), "reading inputs from arguments");
        return Ok(values);
    }

    let (bytes, source) = match file {
        Some(path) => {
            if !path.exists() {
                return Err(not_found(format!("input file {}", path.display())));
            }
            debug!(path = %path.display(), "reading inputs from file");
            let bytes =
                fs::read(path).with_context(|| format!("read input file {}", path.display()))?;
            (bytes, path.display().to_string())
        }
        None => {
            debug!("reading inputs from stdin");
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .with_context(|| "read stdin")?;
            (bytes, "stdin".to_string())
        }
    };

    let text = String::from_utf8(bytes)
        .map_err(|_| invalid_input(format!("{} is not valid UTF-8", source)))?;
    Ok(split_lines(&text))
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
