use std::cell::RefCell;

/// Sink for per-file outcome messages
pub trait Reporter {
    fn report(&self, message: &str);
}

/// Prints each report as a line on standard output
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, message: &str) {
        println!("{}", message);
    }
}

/// Collects reports in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}
