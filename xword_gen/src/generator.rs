use std::fmt::Display;

use common::crossword::{PlacedWord, WordInput, XWordTile};
use itertools::Itertools;
use util::{
  error::{XWordError, XWordResult},
  grid::{Grid, Gridlike},
};

use crate::{
  crop::crop,
  layout::place_words,
  normalize::{normalize_words, require_min_words},
  numbering::renumber,
};

pub const DEFAULT_GRID_SIZE: u32 = 20;
pub const DEFAULT_MIN_WORDS: usize = 2;
pub const MAX_GRID_SIZE: u32 = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
  /// Side length of the square working grid.
  pub grid_size: u32,
  /// How many usable words the input must contain.
  pub min_words: usize,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      grid_size: DEFAULT_GRID_SIZE,
      min_words: DEFAULT_MIN_WORDS,
    }
  }
}

impl LayoutConfig {
  pub fn validate(&self) -> XWordResult {
    if self.grid_size == 0 {
      return Err(XWordError::InvalidConfig(
        "grid size must be at least 1".to_owned(),
      ));
    }
    if self.grid_size > MAX_GRID_SIZE {
      return Err(XWordError::InvalidConfig(format!(
        "grid size {} exceeds the maximum of {MAX_GRID_SIZE}",
        self.grid_size
      )));
    }
    Ok(())
  }
}

/// Reported when some words could not be fit onto the grid. The layout is
/// still usable, it just has fewer words than were asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialPlacementWarning {
  pub requested: usize,
  pub dropped: Vec<String>,
}

impl Display for PartialPlacementWarning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} of {} words did not fit on the grid: {}",
      self.dropped.len(),
      self.requested,
      self.dropped.iter().join(", ")
    )
  }
}

#[derive(Clone, Debug)]
pub struct CrosswordLayout {
  grid: Grid<XWordTile>,
  placed: Vec<PlacedWord>,
  dropped: Vec<WordInput>,
}

impl CrosswordLayout {
  /// The cropped grid.
  pub fn grid(&self) -> &Grid<XWordTile> {
    &self.grid
  }

  /// Placed words in reading order, numbered from 1.
  pub fn placed(&self) -> &[PlacedWord] {
    &self.placed
  }

  pub fn dropped(&self) -> &[WordInput] {
    &self.dropped
  }

  pub fn width(&self) -> u32 {
    self.grid.width()
  }

  pub fn height(&self) -> u32 {
    self.grid.height()
  }

  pub fn partial_placement_warning(&self) -> Option<PartialPlacementWarning> {
    (!self.dropped.is_empty()).then(|| PartialPlacementWarning {
      requested: self.placed.len() + self.dropped.len(),
      dropped: self.dropped.iter().map(|word| word.answer.clone()).collect(),
    })
  }
}

/// Lays out `inputs` as a crossword.
///
/// Input is normalized first, and must leave at least `config.min_words`
/// usable entries. The result is deterministic in the order of `inputs`.
pub fn generate_layout(inputs: &[WordInput], config: &LayoutConfig) -> XWordResult<CrosswordLayout> {
  config.validate()?;

  let words = normalize_words(inputs);
  require_min_words(&words, config.min_words)?;

  let placement = place_words(&words, config.grid_size)?;
  let (grid, placed) = crop(&placement.grid, placement.placed)?;
  let placed = renumber(placed);
  log::debug!(
    "Laid out {} of {} words on a {}x{} grid",
    placed.len(),
    words.len(),
    grid.width(),
    grid.height()
  );

  Ok(CrosswordLayout { grid, placed, dropped: placement.dropped })
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use common::crossword::{Direction, WordInput, XWordTile};
  use googletest::prelude::*;
  use util::{error::XWordError, grid::Gridlike, pos::Pos};

  use super::{generate_layout, LayoutConfig, MAX_GRID_SIZE};

  fn single_word_config() -> LayoutConfig {
    LayoutConfig { min_words: 1, ..LayoutConfig::default() }
  }

  #[gtest]
  fn test_default_config() {
    let config = LayoutConfig::default();
    expect_that!(config.grid_size, eq(20));
    expect_that!(config.min_words, eq(2));
  }

  #[gtest]
  fn test_zero_grid_size() {
    let config = LayoutConfig { grid_size: 0, ..LayoutConfig::default() };
    let result = generate_layout(&[WordInput::new("SUN", "star")], &config);
    expect_true!(matches!(result, Err(XWordError::InvalidConfig(_))));
  }

  #[gtest]
  fn test_oversized_grid() {
    for grid_size in [MAX_GRID_SIZE + 1, 65536, u32::MAX] {
      let config = LayoutConfig { grid_size, min_words: 1 };
      let result = generate_layout(&[WordInput::new("SUN", "star")], &config);
      expect_true!(matches!(result, Err(XWordError::InvalidConfig(_))));
    }
  }

  #[gtest]
  fn test_largest_grid() {
    let config = LayoutConfig { grid_size: MAX_GRID_SIZE, min_words: 1 };
    let layout = generate_layout(&[WordInput::new("SUN", "star")], &config).unwrap();
    expect_that!((layout.width(), layout.height()), eq((3, 1)));
  }

  #[gtest]
  fn test_single_word() {
    let layout =
      generate_layout(&[WordInput::new("sun", "star")], &single_word_config()).unwrap();
    expect_that!(layout.width(), eq(3));
    expect_that!(layout.height(), eq(1));
    expect_that!(layout.placed().len(), eq(1));
    expect_that!(layout.placed()[0].number, eq(1));
    expect_that!(layout.placed()[0].pos, eq(Pos::zero()));
    expect_that!(layout.partial_placement_warning(), none());
  }

  #[gtest]
  fn test_single_word_fails_default_policy() {
    let result = generate_layout(&[WordInput::new("SUN", "star")], &LayoutConfig::default());
    expect_true!(matches!(
      result,
      Err(XWordError::InsufficientWords { required: 2, found: 1 })
    ));
  }

  #[gtest]
  fn test_nothing_usable() {
    let config = LayoutConfig { min_words: 0, ..LayoutConfig::default() };
    let result = generate_layout(&[WordInput::new("123", "digits")], &config);
    expect_true!(matches!(result, Err(XWordError::NoWordsPlaceable)));
  }

  #[gtest]
  fn test_word_too_long() {
    let config = LayoutConfig { grid_size: 5, min_words: 1 };
    let result = generate_layout(&[WordInput::new("CROSSWORD", "this")], &config);
    expect_true!(matches!(
      result,
      Err(XWordError::WordTooLong { length: 9, grid_size: 5, .. })
    ));
  }

  #[gtest]
  fn test_cat_car() {
    let layout = generate_layout(
      &[WordInput::new("CAT", "pet"), WordInput::new("CAR", "vehicle")],
      &LayoutConfig::default(),
    )
    .unwrap();

    expect_that!(layout.width(), eq(3));
    expect_that!(layout.height(), eq(3));

    let placed = layout.placed();
    expect_that!(placed.len(), eq(2));
    assert_eq!(placed[0].answer, "CAT");
    expect_that!(placed[0].direction, eq(Direction::Across));
    expect_that!(placed[0].number, eq(1));
    assert_eq!(placed[1].answer, "CAR");
    expect_that!(placed[1].direction, eq(Direction::Down));
    expect_that!(placed[1].number, eq(2));
    expect_that!(placed[1].pos, eq(Pos::zero()));

    expect_that!(layout.grid().get(Pos::new(1, 1)).copied(), some(eq(XWordTile::Black)));
    expect_that!(layout.grid().get(Pos::new(2, 0)).copied(), some(eq(XWordTile::Letter('R'))));
  }

  #[gtest]
  fn test_disjoint_word_dropped() {
    let layout = generate_layout(
      &[WordInput::new("CAT", "pet"), WordInput::new("DOG", "pet")],
      &LayoutConfig::default(),
    )
    .unwrap();

    expect_that!(layout.placed().len(), eq(1));
    expect_that!(layout.dropped().len(), eq(1));
    let warning = layout.partial_placement_warning().unwrap();
    expect_that!(warning.requested, eq(2));
    assert_eq!(warning.dropped, vec!["DOG".to_owned()]);
    assert_eq!(warning.to_string(), "1 of 2 words did not fit on the grid: DOG");
  }

  #[gtest]
  fn test_red_blue_cross_at_e() {
    let layout = generate_layout(
      &[WordInput::new("RED", "color"), WordInput::new("BLUE", "color")],
      &LayoutConfig::default(),
    )
    .unwrap();

    let placed = layout.placed();
    expect_that!(placed.len(), eq(2));
    // RED hangs down through the E at the end of BLUE.
    assert_eq!(placed[0].answer, "RED");
    expect_that!(placed[0].pos, eq(Pos::new(0, 3)));
    expect_that!(placed[0].direction, eq(Direction::Down));
    assert_eq!(placed[1].answer, "BLUE");
    expect_that!(placed[1].pos, eq(Pos::new(1, 0)));
    expect_that!(layout.width(), eq(4));
    expect_that!(layout.height(), eq(3));
  }
}
