//! Line-oriented prompting over any reader/writer pair.
//!
//! Every `ask_*` method returns `Ok(None)` once input is exhausted so callers
//! can wind the session down instead of spinning on EOF.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use products_hr::{DEFAULT_BASIC_SALARY, MAX_CAPACITY, MIN_CAPACITY, Role};

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `prompt` without a newline and read one line, minus its terminator.
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn ask_integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            match raw.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    pub fn ask_amount(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_amount(&raw) {
                Some(value) => return Ok(Some(value)),
                None => self.say("Please enter a number.")?,
            }
        }
    }

    pub fn ask_role(&mut self) -> io::Result<Option<Role>> {
        let labels = Role::ALL.map(Role::label).join(", ");
        let prompt = format!("Enter role ({labels}): ");
        loop {
            let Some(raw) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match Role::parse(&raw) {
                Ok(role) => return Ok(Some(role)),
                Err(err) => {
                    tracing::debug!(error = %err, "role rejected");
                    self.say(format!("Unknown role. Choose one of: {labels}."))?;
                }
            }
        }
    }

    /// Blank input selects the default salary (`Some(None)`); unparseable
    /// input does the same after a warning.
    pub fn ask_basic_salary(&mut self) -> io::Result<Option<Option<f64>>> {
        let prompt = format!("Enter basic salary (blank for {DEFAULT_BASIC_SALARY:.2}): ");
        let Some(raw) = self.ask(&prompt)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(Some(None));
        }
        match parse_amount(&raw) {
            Some(value) => Ok(Some(Some(value))),
            None => {
                self.say(format!(
                    "Warning: {:?} is not a number; using default basic salary {DEFAULT_BASIC_SALARY:.2}.",
                    raw.trim()
                ))?;
                Ok(Some(None))
            }
        }
    }

    pub fn ask_capacity(&mut self) -> io::Result<Option<usize>> {
        let prompt = format!("Enter roster capacity ({MIN_CAPACITY}-{MAX_CAPACITY}): ");
        loop {
            let Some(raw) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match crate::config::parse_capacity(&raw) {
                Ok(capacity) => return Ok(Some(capacity)),
                Err(_) => self.say(format!(
                    "Capacity must be a whole number between {MIN_CAPACITY} and {MAX_CAPACITY}."
                ))?,
            }
        }
    }
}

/// Finite decimal amounts only; `NaN`/`inf` spellings count as invalid.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
