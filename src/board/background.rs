// Background colour options for the board screen

use super::errors::BoardError;
use std::fmt;
use std::str::FromStr;

/// Named backdrop colours offered by the colour sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundColor {
    #[default]
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Pink,
    Gray,
}

impl BackgroundColor {
    /// Options in the order the colour sheet lists them
    pub const ALL: [BackgroundColor; 8] = [
        BackgroundColor::White,
        BackgroundColor::Red,
        BackgroundColor::Blue,
        BackgroundColor::Green,
        BackgroundColor::Yellow,
        BackgroundColor::Orange,
        BackgroundColor::Pink,
        BackgroundColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BackgroundColor::White => "White",
            BackgroundColor::Red => "Red",
            BackgroundColor::Blue => "Blue",
            BackgroundColor::Green => "Green",
            BackgroundColor::Yellow => "Yellow",
            BackgroundColor::Orange => "Orange",
            BackgroundColor::Pink => "Pink",
            BackgroundColor::Gray => "Gray",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackgroundColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("grey") {
            return Ok(BackgroundColor::Gray);
        }
        BackgroundColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BoardError::UnknownColor {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(BackgroundColor::default(), BackgroundColor::White);
    }

    #[test]
    fn test_parse() {
        assert_eq!("blue".parse::<BackgroundColor>(), Ok(BackgroundColor::Blue));
        assert_eq!("Grey".parse::<BackgroundColor>(), Ok(BackgroundColor::Gray));
        assert_eq!(
            "teal".parse::<BackgroundColor>(),
            Err(BoardError::UnknownColor {
                name: "teal".to_string()
            })
        );
    }

    #[test]
    fn test_index_follows_sheet_order() {
        for (i, color) in BackgroundColor::ALL.into_iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }
}
