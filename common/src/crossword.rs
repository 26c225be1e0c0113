use std::fmt::Display;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use util::pos::{Diff, Pos};

/// A raw answer/clue pair, as typed in by whoever builds the puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct WordInput {
  pub answer: String,
  pub clue: String,
}

impl WordInput {
  pub fn new(answer: impl Into<String>, clue: impl Into<String>) -> Self {
    Self { answer: answer.into(), clue: clue.into() }
  }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  /// The offset between consecutive letters of a word running in this
  /// direction.
  pub fn step(&self) -> Diff {
    match self {
      Direction::Across => Diff::DX,
      Direction::Down => Diff::DY,
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Direction::Across => "across",
        Direction::Down => "down",
      }
    )
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
  pub answer: String,
  pub clue: String,
  /// Position of the first letter.
  pub pos: Pos,
  pub direction: Direction,
  pub number: u32,
}

impl PlacedWord {
  pub fn row(&self) -> i32 {
    self.pos.row()
  }

  pub fn col(&self) -> i32 {
    self.pos.col()
  }

  pub fn len(&self) -> usize {
    self.answer.chars().count()
  }

  pub fn is_empty(&self) -> bool {
    self.answer.is_empty()
  }

  pub fn letter_positions(&self) -> impl Iterator<Item = (char, Pos)> + '_ {
    let step = self.direction.step();
    self
      .answer
      .chars()
      .enumerate()
      .map(move |(idx, c)| (c, self.pos + step * idx as i32))
  }

  pub fn covers(&self, pos: Pos) -> bool {
    self.letter_positions().any(|(_, letter_pos)| letter_pos == pos)
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Encode, Decode)]
pub enum XWordTile {
  Letter(char),
  #[default]
  Black,
}

impl XWordTile {
  pub fn letter(&self) -> Option<char> {
    match self {
      XWordTile::Letter(c) => Some(*c),
      XWordTile::Black => None,
    }
  }

  pub fn is_black(&self) -> bool {
    matches!(self, XWordTile::Black)
  }
}

impl From<Option<char>> for XWordTile {
  fn from(value: Option<char>) -> Self {
    value.map_or(XWordTile::Black, XWordTile::Letter)
  }
}

impl Display for XWordTile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        XWordTile::Letter(c) => *c,
        XWordTile::Black => '#',
      }
    )
  }
}
