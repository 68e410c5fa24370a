//! Interactive yes/no confirmation.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Default number of answers accepted before giving up.
pub const DEFAULT_ATTEMPTS: usize = 3;

/// Something that can ask the operator a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompt on a reader/writer pair, usually stdin and stderr.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompt {
            input,
            output,
            max_attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        ask_yes_no(&mut self.input, &mut self.output, question, self.max_attempts)
    }
}

/// Ask `question` until a y/n answer is given.
///
/// Invalid answers re-prompt with "Please enter y or n". Fails after
/// `max_attempts` answers without a decision, or at end of input.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    max_attempts: usize,
) -> Result<bool> {
    let mut prompt = question;

    for _ in 0..max_attempts {
        write!(output, "{} (y/n) ", prompt)?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            bail!("no answer given (end of input)");
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => prompt = "Please enter y or n",
        }
    }

    bail!("no valid answer after {} attempts", max_attempts)
}
