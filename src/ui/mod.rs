//! UI module for clickup-tasks
//!
//! This module turns sorted tasks into table rows and prints them.

pub mod rows;
pub mod table;

use anyhow::Result;
use crossterm::tty::IsTty;
use std::io::{self, Write};

use crate::constants::NO_TASKS_MESSAGE;
pub use rows::{build_rows, TaskRow};
pub use table::{render_buffer, TableStyles};

/// Print `rows` as a table on stdout. Styling is applied only when stdout is a terminal.
pub fn print_table(rows: &[TaskRow], styles: &TableStyles) -> Result<()> {
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();

    if rows.is_empty() {
        writeln!(out, "{NO_TASKS_MESSAGE}")?;
        return Ok(());
    }

    let buffer = render_buffer(rows, styles);
    table::write_buffer(&mut out, &buffer, styled)
}
