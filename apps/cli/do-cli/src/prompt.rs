use crate::error::CliError;

use std::io::{BufRead, Write};

/// Ask a yes/no question; only `y` or `yes` (any case) count as yes.
///
/// End of input counts as no.
pub fn confirm(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    question: &str,
) -> Result<bool, CliError> {
    write!(out, "{question} (y/N): ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
