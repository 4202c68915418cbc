//! Console view

use std::io::{self, Stdout, Write};

use crate::record::Employee;

use super::View;

/// Plain-text view writing to any `Write` sink (stdout by default)
pub struct ConsoleView<W: Write = Stdout> {
    out: W,
}

impl ConsoleView<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Write errors on the sink are ignored.
impl<W: Write> View for ConsoleView<W> {
    fn show_message(&mut self, message: &str, is_error: bool) {
        let tag = if is_error { "ERROR" } else { "INFO" };
        let _ = writeln!(self.out, "[{}] {}", tag, message);
    }

    fn show_table_header(&mut self) {
        let _ = writeln!(
            self.out,
            "{:<8} {:<20} {:<20} {:<12} {:<10}",
            "ID", "Name", "Department", "Date", "Days"
        );
        let _ = writeln!(self.out, "{}", "-".repeat(74));
    }

    fn render_row(&mut self, employee: &Employee) {
        let _ = writeln!(self.out, "{}", employee);
    }
}
