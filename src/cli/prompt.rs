//! Interactive translation prompt used in translate mode.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use colored::Colorize;

use crate::core::{MissingKey, TranslationProvider};

/// Asks the operator for each missing translation, one line per key.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::BufReader<Stdin>, Stdout> {
    /// Prompt on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> TranslationProvider for Prompt<R, W> {
    fn provide(&mut self, missing: &MissingKey<'_>) -> io::Result<String> {
        writeln!(
            self.output,
            "Key {} is missing in translation '{}'",
            format!("'{}': '{}'", missing.key, missing.template_value).bold(),
            missing.code
        )?;
        write!(self.output, "Enter translation: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for a translation",
            ));
        }

        Ok(strip_line_ending(&line).to_string())
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
