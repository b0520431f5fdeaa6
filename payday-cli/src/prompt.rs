//! Console input/output used by the interactive menu
//!
//! [`TerminalConsole`] drives a real terminal through dialoguer. When stdin is
//! not a TTY, [`LineConsole`] reads one answer per line so the menu can be
//! scripted (and tested).

use std::io::{BufRead, Write};

use anyhow::Result;
use dialoguer::{Input, Select};

pub trait Console {
    /// Ask for a line of text. `None` means input is exhausted.
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Ask the user to pick one of `items`, returning its index.
    /// `None` means the user backed out or input is exhausted.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Print a line of output
    fn println(&mut self, line: &str) -> Result<()>;
}

/// Interactive terminal prompts
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(answer))
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn println(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}

/// Line-oriented prompts over any reader/writer pair
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console, returning the writer
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        loop {
            writeln!(self.writer, "{}", prompt)?;
            for (i, item) in items.iter().enumerate() {
                writeln!(self.writer, "{}. {}", i + 1, item)?;
            }
            write!(self.writer, "Choose an option: ")?;
            self.writer.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.writer, "Invalid Option")?,
            }
        }
    }

    fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
