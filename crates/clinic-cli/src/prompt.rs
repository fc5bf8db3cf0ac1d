use crate::{CliError, CliResult};

use std::io::{BufRead, Write};

/// Ask a yes/no question on stderr and read the answer from stdin.
///
/// Anything other than `y`/`yes` is a no, including end of input.
pub fn confirm(question: &str) -> CliResult<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{question} [y/N] ")
        .and_then(|_| stderr.flush())
        .map_err(|e| CliError::io("Failed to write prompt", e))?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| CliError::io("Failed to read answer", e))?;

    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
