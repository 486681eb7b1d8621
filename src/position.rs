//! Quadrant numbering shared by every split.
//!
//! ```text
//!  3 | 1
//!  --+--
//!  4 | 2
//! ```

use std::fmt;

use crate::error::{QuadtreeError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Position {
    NE = 1,
    SE = 2,
    NW = 3,
    SW = 4,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::NE, Position::SE, Position::NW, Position::SW];

    pub fn new(raw: i64) -> Result<Self> {
        match raw {
            1 => Ok(Self::NE),
            2 => Ok(Self::SE),
            3 => Ok(Self::NW),
            4 => Ok(Self::SW),
            _ => Err(QuadtreeError::InvalidPosition(raw)),
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Slot of this quadrant in a parent's child array.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// True for the east-side quadrants 1 and 2.
    pub fn is_east(self) -> bool {
        matches!(self, Self::NE | Self::SE)
    }

    /// The quadrant across the vertical midline of the same split.
    pub fn mirror(self) -> Self {
        match self {
            Self::NE => Self::NW,
            Self::SE => Self::SW,
            Self::NW => Self::NE,
            Self::SW => Self::SE,
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = QuadtreeError;

    fn try_from(raw: u8) -> Result<Self> {
        Self::new(raw as i64)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
