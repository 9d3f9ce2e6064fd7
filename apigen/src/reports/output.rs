//! Where reports end up.
//!
//! Reports describe their content as a sequence of [`Line`]s; an [`Output`]
//! decides where those lines go.

use std::fmt;

/// One semantic line of a report.
#[derive(Debug, Clone, Copy)]
pub enum Line<'a> {
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    ListItem(&'a str),
    /// A file that was written.
    Added(&'a str),
    /// Diagnostics; the terminal sends these to stderr.
    Warning(&'a str),
    Divider(&'a str),
    Text(&'a str),
    Blank,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Section(name) => write!(f, "{}:", name),
            Line::KeyValue(key, value) => write!(f, "{}: {}", key, value),
            Line::ListItem(text) => write!(f, "  - {}", text),
            Line::Added(text) => write!(f, "  + {}", text),
            Line::Divider(label) => write!(f, "── {} ──", label),
            Line::Warning(text) | Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

pub trait Output {
    fn emit(&mut self, line: Line<'_>);

    fn section(&mut self, name: &str) {
        self.emit(Line::Section(name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(Line::KeyValue(key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(Line::ListItem(text));
    }

    fn added_item(&mut self, text: &str) {
        self.emit(Line::Added(text));
    }

    fn warning(&mut self, msg: &str) {
        self.emit(Line::Warning(msg));
    }

    fn divider(&mut self, label: &str) {
        self.emit(Line::Divider(label));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(Line::Text(text));
    }

    fn newline(&mut self) {
        self.emit(Line::Blank);
    }
}

/// Something a command can show the user once it is done.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout, with warnings on stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn emit(&mut self, line: Line<'_>) {
        match line {
            Line::Warning(_) => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Keeps every rendered line for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn emit(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}
