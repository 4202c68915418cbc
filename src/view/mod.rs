//! View Module
//!
//! Presentation seam between the core and whatever front end drives it.
//! One implementation per presentation mode; the console one ships here.

mod console;

pub use console::ConsoleView;

use crate::record::Employee;

/// Output surface for messages and record tables
pub trait View {
    /// Show a status line; `is_error` selects the error tone
    fn show_message(&mut self, message: &str, is_error: bool);

    /// Column headings for a record table
    fn show_table_header(&mut self);

    /// One table row
    fn render_row(&mut self, employee: &Employee);

    /// Header followed by one row per record
    fn render_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Employee>,
        Self: Sized,
    {
        self.show_table_header();
        for employee in records {
            self.render_row(employee);
        }
    }
}
