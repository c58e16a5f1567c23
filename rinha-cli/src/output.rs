//! Status lines for the driver.
//! 驱动程序的状态行。
//!
//! Values shown by `rinha eval` go to stdout. Everything else goes to
//! stderr, since stdout belongs to the program being run. Colour is only
//! used when the stream is a terminal.

use std::io::{self, IsTerminal};

#[derive(Clone, Copy)]
enum Tone {
    Value,
    Warning,
    Error,
    Info,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Value => "32",
            Tone::Warning => "33",
            Tone::Error => "31",
            Tone::Info => "34",
        }
    }

    fn prefix(self) -> Option<&'static str> {
        match self {
            Tone::Value => None,
            Tone::Warning => Some("warning:"),
            Tone::Error => Some("error:"),
            Tone::Info => Some("info:"),
        }
    }
}

/// Format one line. Only the prefix is coloured, or the whole value when
/// there is no prefix.
fn line(tone: Tone, msg: &str, color: bool) -> String {
    match (tone.prefix(), color) {
        (Some(prefix), true) => format!("\x1b[{}m{prefix}\x1b[0m {msg}", tone.ansi()),
        (Some(prefix), false) => format!("{prefix} {msg}"),
        (None, true) => format!("\x1b[{}m{msg}\x1b[0m", tone.ansi()),
        (None, false) => msg.to_string(),
    }
}

fn to_stderr(tone: Tone, msg: &str) {
    eprintln!("{}", line(tone, msg, io::stderr().is_terminal()));
}

/// Show a result on stdout.
pub fn success(msg: &str) {
    println!("{}", line(Tone::Value, msg, io::stdout().is_terminal()));
}

pub fn warning(msg: &str) {
    to_stderr(Tone::Warning, msg);
}

pub fn error(msg: &str) {
    to_stderr(Tone::Error, msg);
}

pub fn info(msg: &str) {
    to_stderr(Tone::Info, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        assert_eq!(line(Tone::Value, "(1,2)", false), "(1,2)");
        assert_eq!(line(Tone::Error, "decode error", false), "error: decode error");
        assert_eq!(line(Tone::Info, "Root node: Let", false), "info: Root node: Let");
    }

    #[test]
    fn test_colored_lines() {
        assert_eq!(line(Tone::Value, "3", true), "\x1b[32m3\x1b[0m");
        assert_eq!(
            line(Tone::Warning, "stale source", true),
            "\x1b[33mwarning:\x1b[0m stale source"
        );
    }
}
