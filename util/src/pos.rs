use std::{
  fmt::Display,
  ops::{Add, Mul, Sub},
};

use bitcode::{Decode, Encode};

/// A grid coordinate. `x` is the column and `y` is the row.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Encode, Decode)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { x: 0, y: 0 }
  }

  pub const fn new(row: i32, col: i32) -> Self {
    Self { x: col, y: row }
  }

  pub const fn row(&self) -> i32 {
    self.y
  }

  pub const fn col(&self) -> i32 {
    self.x
  }

  pub const fn transpose(&self) -> Self {
    Self { x: self.y, y: self.x }
  }

  /// Key that orders positions top-to-bottom, then left-to-right.
  pub const fn reading_order(&self) -> (i32, i32) {
    (self.y, self.x)
  }
}

/// Positions order in reading order, matching `reading_order`.
impl Ord for Pos {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.reading_order().cmp(&other.reading_order())
  }
}

impl PartialOrd for Pos {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Sub for Pos {
  type Output = Diff;

  fn sub(self, rhs: Self) -> Diff {
    Diff { x: self.x - rhs.x, y: self.y - rhs.y }
  }
}

impl Sub<Diff> for Pos {
  type Output = Self;

  fn sub(self, rhs: Diff) -> Self {
    Self { x: self.x - rhs.x, y: self.y - rhs.y }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(row {}, col {})", self.y, self.x)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  /// One step to the right.
  pub const DX: Diff = Diff { x: 1, y: 0 };
  /// One step down.
  pub const DY: Diff = Diff { x: 0, y: 1 };

  pub const fn transpose(&self) -> Self {
    Self { x: self.y, y: self.x }
  }
}

impl Add for Diff {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Mul<i32> for Diff {
  type Output = Diff;

  fn mul(self, rhs: i32) -> Self {
    Self { x: self.x * rhs, y: self.y * rhs }
  }
}

impl Display for Diff {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
