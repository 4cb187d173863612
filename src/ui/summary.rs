//! Plain-text rendering of the board

use crate::board::Board;
use std::io::{self, Write};

/// Write every category with its reminders, marking the selected one
pub fn write_summary<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    for (category, info) in board.categories().iter() {
        let marker = if category == board.selected() { ">" } else { " " };
        writeln!(
            out,
            "{} {} {} ({})",
            marker,
            info.emoji,
            info.title,
            board.len(category)
        )?;
        for reminder in board.list(category) {
            writeln!(out, "    - {}", reminder.title)?;
        }
    }
    writeln!(out, "background: {}", board.background())?;
    Ok(())
}
