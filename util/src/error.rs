use std::error::Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XWordError {
  /// Nothing ended up on the grid, so there is nothing to crop or render.
  #[error("No words could be placed on the grid")]
  NoWordsPlaceable,

  #[error("Word \"{word}\" has {length} letters, but the grid is only {grid_size} wide")]
  WordTooLong { word: String, length: usize, grid_size: u32 },

  #[error("At least {required} words with clues are needed, found {found}")]
  InsufficientWords { required: usize, found: usize },

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("A crossword needs a title")]
  MissingTitle,

  #[error("Parse error: {0}")]
  Parse(String),

  #[error("Internal error: {0}")]
  Internal(String),
}

pub type XWordResult<T = ()> = Result<T, XWordError>;

/// Result type for binaries, which also need to carry I/O and encoding errors.
pub type DynResult<T = ()> = Result<T, Box<dyn Error>>;
