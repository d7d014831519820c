//! Terminal abstraction.
//!
//! Pages talk to the user only through [`Terminal`], so they can be driven
//! by a real console or by a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{UiError, UiResult};

/// Line-oriented console.
pub trait Terminal: Send {
    /// Prints one line.
    fn say(&mut self, line: &str);

    /// Prompts and reads one line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input.
    fn read_line(&mut self, prompt: &str) -> UiResult<String>;

    /// Prompts and reads one line without echoing it.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input.
    fn read_secret(&mut self, prompt: &str) -> UiResult<String>;
}

/// Terminal on the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    /// Creates a new `StdTerminal`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Terminal for StdTerminal {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn read_line(&mut self, prompt: &str) -> UiResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(UiError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> UiResult<String> {
        match rpassword::read_password_from_tty(Some(prompt)) {
            Ok(secret) => Ok(secret),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(UiError::InputClosed),
            Err(e) => Err(e.into()),
        }
    }
}

/// Terminal that replays canned input and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    /// Creates a terminal that answers prompts with `input`, in order.
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line printed and every prompt shown, in order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The whole output joined with newlines.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    fn next(&mut self, prompt: &str) -> UiResult<String> {
        self.output.push(prompt.to_string());
        self.input.pop_front().ok_or(UiError::InputClosed)
    }
}

impl Terminal for ScriptedTerminal {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> UiResult<String> {
        self.next(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> UiResult<String> {
        self.next(prompt)
    }
}

/// Reads a line, asking again until it is not blank.
///
/// Plain fields are trimmed. Secret fields are returned exactly as typed.
///
/// # Errors
///
/// Returns `InputClosed` at end of input.
pub fn read_required<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
    secret: bool,
) -> UiResult<String> {
    loop {
        let value = if secret {
            term.read_secret(prompt)?
        } else {
            term.read_line(prompt)?.trim().to_string()
        };
        if !value.is_empty() {
            return Ok(value);
        }
        term.say("This field is required.");
    }
}
