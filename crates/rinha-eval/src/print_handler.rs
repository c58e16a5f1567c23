//! Where `print` output goes.
//!
//! - Stdout: the process driver
//! - Buffer: tests and `rinha eval`, which show output after the value
//! - Silent: discard

use std::cell::RefCell;
use std::io::{self, Write};

/// Output sink for `print`. No separator is added between prints.
pub enum PrintHandler {
    /// Writes to stdout as it goes.
    Stdout,
    /// Captures output in memory.
    Buffer(RefCell<String>),
    /// Discards everything.
    Silent,
}

impl PrintHandler {
    pub fn stdout() -> Self {
        PrintHandler::Stdout
    }

    pub fn buffer() -> Self {
        PrintHandler::Buffer(RefCell::new(String::new()))
    }

    pub fn silent() -> Self {
        PrintHandler::Silent
    }

    pub fn print(&self, text: &str) -> io::Result<()> {
        match self {
            PrintHandler::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            PrintHandler::Buffer(buffer) => {
                buffer.borrow_mut().push_str(text);
                Ok(())
            }
            PrintHandler::Silent => Ok(()),
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match self {
            PrintHandler::Stdout => io::stdout().lock().flush(),
            PrintHandler::Buffer(_) | PrintHandler::Silent => Ok(()),
        }
    }

    /// Captured output so far. Empty for handlers that don't capture.
    pub fn contents(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.borrow().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Take the captured output, leaving the buffer empty.
    pub fn take(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => std::mem::take(&mut *buffer.borrow_mut()),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        Self::stdout()
    }
}
