use std::io;
use std::path::PathBuf;

/// Errors raised while building a dictionary or a board. Dictionary queries never
/// fail; a miss is just `false`/`None`.
#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("incorrect sized board source: expected {expected} letters, got {actual}")]
    LetterCountMismatch { expected: usize, actual: usize },

    #[error("board side length {size} is too large")]
    BoardTooLarge { size: usize },

    #[error("incorrect sized element at index {index}: {value:?}")]
    InvalidLetter { index: usize, value: String },

    #[error("board is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("dictionary not found at: {}", path.display())]
    DictionaryNotFound { path: PathBuf },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed board file: {0}")]
    BoardFormat(#[from] serde_json::Error),
}

impl BoggleError {
    /// True for errors caused by the caller's board input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::LetterCountMismatch { .. }
                | Self::BoardTooLarge { .. }
                | Self::InvalidLetter { .. }
                | Self::NotSquare { .. }
        )
    }
}
