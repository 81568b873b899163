use loopdns_domain::ResolutionMode;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter 0 for public DNS querying or 1 for iterative searching: ";

/// Mode from the config if it has one, otherwise asked on stdin.
pub async fn resolve_mode(configured: Option<ResolutionMode>) -> anyhow::Result<ResolutionMode> {
    if let Some(mode) = configured {
        return Ok(mode);
    }

    let mode = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt_mode(stdin.lock(), stdout.lock())
    })
    .await??;

    Ok(mode)
}

/// Keeps asking until the operator types 0 or 1.
pub fn prompt_mode<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<ResolutionMode> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a resolution mode was chosen",
            ));
        }

        match line.trim().parse::<i64>() {
            Ok(selector) => match ResolutionMode::from_selector(selector) {
                Some(mode) => return Ok(mode),
                None => writeln!(output, "Input error, please enter again.")?,
            },
            Err(_) => writeln!(output, "Invalid input, please enter an integer.")?,
        }
    }
}
