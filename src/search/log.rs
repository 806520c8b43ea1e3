use std::cell::RefCell;

const RULE: &str =
    "---------------------------------------------------------------------------";

/// Bordered console section title, e.g. `TOP NODE VALUES`
#[must_use]
pub fn section_title(title: &str) -> String {
    format!("\n{RULE}\n {title}:\n{RULE}\n")
}

/// Destination for human-readable search output
pub trait SearchLogger {
    fn emit(&self, text: &str);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn emit(&self, text: &str) {
        println!("{text}");
    }
}

/// Collects everything emitted, one entry per call
#[derive(Default)]
pub struct BufferLogger {
    lines: RefCell<Vec<String>>,
}

impl BufferLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

impl SearchLogger for BufferLogger {
    fn emit(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
