//! Dotted path identifiers such as `4.1.3`, with `root` naming the root.

use std::fmt;
use std::str::FromStr;

use crate::error::{QuadtreeError, Result};
use crate::position::Position;

pub const ROOT_ID: &str = "root";

/// Sequence of quadrant positions leading from the root to a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<Position>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn child(&self, position: Position) -> Self {
        let mut segments = self.segments.clone();
        segments.push(position);
        Self { segments }
    }
}

impl From<Vec<Position>> for NodePath {
    fn from(segments: Vec<Position>) -> Self {
        Self { segments }
    }
}

impl FromStr for NodePath {
    type Err = QuadtreeError;

    fn from_str(s: &str) -> Result<Self> {
        if s == ROOT_ID {
            return Ok(Self::root());
        }
        let segments = s
            .split('.')
            .map(|segment| {
                let malformed = || QuadtreeError::MalformedPath {
                    path: s.to_string(),
                    segment: segment.to_string(),
                };
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                let raw = segment.parse::<i64>().map_err(|_| malformed())?;
                Position::new(raw)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(ROOT_ID);
        }
        for (i, position) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}
