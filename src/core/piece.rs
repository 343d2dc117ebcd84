//! Piece identities.
//!
//! A piece is who a player *is*, independent of where they stand or what
//! tickets they hold. There is exactly one `MrX` per game and any number of
//! detectives, each identified by a distinct colour.

use serde::{Deserialize, Serialize};

/// Detective colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Detective {
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl Detective {
    /// All detective colours in board order.
    pub const ALL: [Detective; 5] = [
        Detective::Red,
        Detective::Green,
        Detective::Blue,
        Detective::White,
        Detective::Yellow,
    ];

    /// Web colour of the detective's token.
    #[must_use]
    pub const fn web_colour(self) -> &'static str {
        match self {
            Detective::Red => "#f00",
            Detective::Green => "#0f0",
            Detective::Blue => "#00f",
            Detective::White => "#fff",
            Detective::Yellow => "#ff0",
        }
    }
}

impl std::fmt::Display for Detective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Detective::Red => "Red",
            Detective::Green => "Green",
            Detective::Blue => "Blue",
            Detective::White => "White",
            Detective::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Identity of a player.
///
/// `MrX` sorts before every detective, so ordered sets of pieces always
/// list the fugitive first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Piece {
    MrX,
    Detective(Detective),
}

impl Piece {
    /// Check if this piece is the fugitive.
    #[must_use]
    pub const fn is_mr_x(self) -> bool {
        matches!(self, Piece::MrX)
    }

    /// Check if this piece is a detective.
    #[must_use]
    pub const fn is_detective(self) -> bool {
        matches!(self, Piece::Detective(_))
    }

    /// Web colour of the piece's token. MrX is always black.
    #[must_use]
    pub const fn web_colour(self) -> &'static str {
        match self {
            Piece::MrX => "#000",
            Piece::Detective(colour) => colour.web_colour(),
        }
    }
}

impl From<Detective> for Piece {
    fn from(colour: Detective) -> Self {
        Piece::Detective(colour)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::MrX => f.write_str("MrX"),
            Piece::Detective(colour) => write!(f, "{} detective", colour),
        }
    }
}
