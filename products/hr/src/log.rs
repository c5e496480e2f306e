//! Sinks for the human-readable action log written by the roster.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for roster action lines. Appends are fire-and-forget.
pub trait ActionLog {
    fn append(&mut self, at: DateTime<Local>, message: &str);
}

/// Writes `[timestamp] message` lines to any writer.
#[derive(Debug)]
pub struct ConsoleLog<W: Write> {
    out: W,
}

impl ConsoleLog<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ActionLog for ConsoleLog<W> {
    fn append(&mut self, at: DateTime<Local>, message: &str) {
        let line = format!("[{}] {message}", at.format(TIMESTAMP_FORMAT));
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %err, "failed to write action log line");
        }
    }
}

/// In-memory sink; clones share the same message list.
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl ActionLog for MemoryLog {
    fn append(&mut self, _at: DateTime<Local>, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn console_lines_are_timestamped() {
        let mut log = ConsoleLog::new(Vec::new());
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        log.append(at, "Added employee Alice (ID 1)");
        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(text, "[2024-03-09 14:05:07] Added employee Alice (ID 1)\n");
    }

    #[test]
    fn memory_log_clones_share_messages() {
        let log = MemoryLog::new();
        let mut writer = log.clone();
        writer.append(Local::now(), "first");
        writer.append(Local::now(), "second");
        assert_eq!(log.messages(), vec!["first", "second"]);
        assert_eq!(log.last().as_deref(), Some("second"));
    }
}
