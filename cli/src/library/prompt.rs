use std::io::{BufRead, Write};

use inquire::{InquireError, Text};

use crate::library::{
    constant::PROMPT,
    error::{Error, Result},
};

/// Where the selector gets candidate agent identifiers from.
pub trait IdentifierSource {
    fn next_identifier(&mut self) -> Result<String>;
}

/// Interactive prompt for a terminal.
#[derive(Default)]
pub struct InquirePrompt;

impl IdentifierSource for InquirePrompt {
    fn next_identifier(&mut self) -> Result<String> {
        match Text::new(PROMPT).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Err(Error::InputClosed)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Line based prompt for piped input.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt { input, output }
    }
}

impl<R: BufRead, W: Write> IdentifierSource for LinePrompt<R, W> {
    fn next_identifier(&mut self) -> Result<String> {
        write!(self.output, "{} ", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(Error::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
