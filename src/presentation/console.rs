//! Console seam between the prompt loops and the terminal.
//!
//! `TerminalConsole` drives `dialoguer` prompts when a person is at a
//! terminal; `LineConsole` reads plain lines from any `BufRead`, which is what
//! piped input and tests use.

use std::io::{self, BufRead, ErrorKind, Write};

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Input;

use crate::error::PayrollResult;

use super::context::UiContext;

pub trait Console {
    /// Ask for one line of input. `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> PayrollResult<Option<String>>;

    /// Where rendered output goes.
    fn out(&mut self) -> &mut dyn Write;

    fn emit(&mut self, text: &str) -> PayrollResult<()> {
        let out = self.out();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Line-oriented console over arbitrary reader/writer pairs.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> PayrollResult<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        // Invalid UTF-8 is an answer to reject, not a read failure.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}

/// Interactive console backed by `dialoguer` text inputs.
pub struct TerminalConsole {
    stdout: io::Stdout,
    theme: Box<dyn Theme>,
}

impl TerminalConsole {
    pub fn new(ui: &UiContext) -> Self {
        let theme: Box<dyn Theme> = if ui.color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self {
            stdout: io::stdout(),
            theme,
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> PayrollResult<Option<String>> {
        let answer = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

/// Pick the console that fits the current terminal.
pub fn console_for(ui: &UiContext) -> Box<dyn Console> {
    if ui.interactive {
        Box::new(TerminalConsole::new(ui))
    } else {
        Box::new(LineConsole::new(io::stdin().lock(), io::stdout()))
    }
}
