use std::io::{BufRead, Write};
use thiserror::Error;
use validator::Validate;

use crate::models::{CutoffChoice, ExportChoice, ExportRequest};

pub const CUTOFF_PROMPT: &str = "Desired Cutoff (Enter -1 for maximum full-matching cutoff):";
pub const EXPORT_PROMPT: &str =
    "Would you like this matching to be stored in a CSV if successful (Input true or false):";
pub const PATH_PROMPT: &str = "Filename for CSV:";

/// Errors that can occur while collecting interactive choices
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cutoff '{0}': expected an integer (-1 to search)")]
    InvalidCutoff(String),

    #[error("Invalid input given: '{0}'")]
    InvalidExportChoice(String),

    #[error("Export path must not be empty")]
    EmptyPath,
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, PromptError> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for the cutoff; -1 requests the full-matching search
pub fn read_cutoff<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<CutoffChoice, PromptError> {
    let answer = ask(input, output, CUTOFF_PROMPT)?;
    answer
        .parse::<i64>()
        .map(CutoffChoice::from_raw)
        .map_err(|_| PromptError::InvalidCutoff(answer.clone()))
}

/// Ask whether to export and, if so, where
pub fn read_export<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ExportChoice, PromptError> {
    let answer = ask(input, output, EXPORT_PROMPT)?;
    match answer.to_lowercase().as_str() {
        "false" => Ok(ExportChoice::Skip),
        "true" => {
            let request = ExportRequest {
                path: ask(input, output, PATH_PROMPT)?,
            };
            if request.validate().is_err() {
                return Err(PromptError::EmptyPath);
            }
            Ok(ExportChoice::Export(request))
        }
        _ => Err(PromptError::InvalidExportChoice(answer)),
    }
}
