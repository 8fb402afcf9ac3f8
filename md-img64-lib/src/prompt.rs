//! Interactive fallback for values that were not given on the command line.

use crate::error::ImageRefError;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Asks the user for a line of text and returns it trimmed.
///
/// On a terminal this uses a `dialoguer` prompt. When stdin is redirected the
/// prompt is written to stderr and a single line is read from stdin, so the
/// tools stay usable from scripts. An empty answer is returned as `""`.
pub fn prompt_line(message: &str) -> Result<String, ImageRefError> {
    if io::stdin().is_terminal() {
        let answer: String = Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ImageRefError::Prompt(e.to_string()))?;
        return Ok(answer.trim().to_string());
    }

    read_answer(message, io::stdin().lock(), io::stderr())
}

/// Writes `message` to `output` and reads one line from `input`.
pub(crate) fn read_answer<R: BufRead, W: Write>(
    message: &str,
    mut input: R,
    mut output: W,
) -> Result<String, ImageRefError> {
    write!(output, "{message}: ")
        .and_then(|_| output.flush())
        .map_err(|e| ImageRefError::Prompt(e.to_string()))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| ImageRefError::Prompt(e.to_string()))?;

    Ok(answer.trim().to_string())
}
