//! Command-line configuration

use crate::board::{BackgroundColor, Board, BoardError, Category};
use clap::Parser;
use std::str::FromStr;

/// A reminder given on the command line as `CATEGORY:TITLE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub category: Category,
    pub title: String,
}

impl FromStr for Seed {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, title) = s.split_once(':').ok_or_else(|| BoardError::InvalidSeed {
            input: s.to_string(),
        })?;
        Ok(Seed {
            category: category.parse()?,
            title: title.to_string(),
        })
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "reminder-board",
    version,
    about = "Jot reminders into emoji-tagged lists from the terminal"
)]
pub struct Config {
    /// List selected at startup (school, work, home, misc)
    #[arg(long, short = 'c', value_name = "CATEGORY", default_value_t = Category::School)]
    pub category: Category,

    /// Background colour (white, red, blue, green, yellow, orange, pink, gray)
    #[arg(long, short = 'b', value_name = "COLOR", default_value_t = BackgroundColor::White)]
    pub background: BackgroundColor,

    /// Pre-fill a reminder; may be repeated
    #[arg(long = "add", short = 'a', value_name = "CATEGORY:TITLE")]
    pub seeds: Vec<Seed>,

    /// Print the board and exit instead of opening the terminal UI
    #[arg(long)]
    pub no_tui: bool,
}

impl Config {
    /// Build the startup board. Blank seed titles are ignored like any other
    /// blank input.
    pub fn build_board(&self) -> Board {
        let mut board = Board::new();
        for seed in &self.seeds {
            board.add_reminder(seed.category, &seed.title);
        }
        board.select(self.category);
        board.set_background(self.background);
        board
    }
}
