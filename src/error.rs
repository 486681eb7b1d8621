use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuadtreeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    /// A quadrant number outside `1..=4`.
    #[error("invalid quadrant position {0}, expected 1..=4")]
    InvalidPosition(i64),

    #[error("malformed path `{path}`: bad segment `{segment}`")]
    MalformedPath { path: String, segment: String },

    /// The lookup walked into a leaf before the path was exhausted.
    #[error("no node at path `{path}`")]
    NotFound { path: String },

    #[error("node `{path}` is already split")]
    AlreadySplit { path: String },

    #[error("cannot split `{path}`: maximum depth {max_depth} reached")]
    MaxDepthExceeded { path: String, max_depth: u8 },
}

impl QuadtreeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuadtreeError::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuadtreeError::InvalidPosition(_) | QuadtreeError::MalformedPath { .. }
        )
    }
}
