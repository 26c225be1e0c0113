use std::fmt::{Debug, Display};

use bitcode::{Decode, Encode};

use crate::{
  error::{XWordError, XWordResult},
  pos::Pos,
};

/// Read access to a rectangular board addressed by `Pos`.
pub trait Gridlike<T> {
  fn width(&self) -> u32;
  fn height(&self) -> u32;
  fn in_bounds(&self, pos: Pos) -> bool;

  fn get(&self, pos: Pos) -> Option<&T>;
}

pub trait MutGridlike<T>: Gridlike<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T>;
}

#[derive(Clone, PartialEq, Eq, Encode, Decode)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, width: u32, height: u32) -> XWordResult<Self> {
    let expected_size = width as usize * height as usize;
    if grid.len() != expected_size {
      return Err(XWordError::Internal(format!(
        "Expected grid.len() == expected_size, {} != {expected_size}",
        grid.len()
      )));
    }

    Ok(Self { grid, width, height })
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    let x = pos.x as usize;
    let y = pos.y as usize;
    x + y * self.width as usize
  }

  /// All positions in reading order.
  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    let width = self.width;
    (0..self.height as i32).flat_map(move |y| (0..width as i32).map(move |x| Pos { x, y }))
  }

  pub fn rows(&self) -> impl Iterator<Item = &[T]> {
    // chunks(0) panics.
    self.grid.chunks(self.width.max(1) as usize)
  }

  pub fn map<F, U>(&self, f: F) -> Grid<U>
  where
    F: FnMut(&T) -> U,
  {
    Grid {
      grid: self.grid.iter().map(f).collect(),
      width: self.width,
      height: self.height,
    }
  }

  /// Returns the top-left and bottom-right corners of the smallest rectangle
  /// containing every tile matching `pred`, or `None` if no tile matches.
  pub fn bounding_box<F>(&self, mut pred: F) -> Option<(Pos, Pos)>
  where
    F: FnMut(&T) -> bool,
  {
    self
      .positions()
      .filter(|&pos| self.get(pos).is_some_and(&mut pred))
      .fold(None, |bounds, pos| {
        Some(match bounds {
          None => (pos, pos),
          Some((min, max)) => (
            Pos { x: min.x.min(pos.x), y: min.y.min(pos.y) },
            Pos { x: max.x.max(pos.x), y: max.y.max(pos.y) },
          ),
        })
      })
  }

  pub fn transpose(&self) -> TransposeGrid<'_, T> {
    TransposeGrid { grid: self }
  }

  pub fn transpose_mut(&mut self) -> MutTransposeGrid<'_, T> {
    MutTransposeGrid { grid: self }
  }
}

impl<T: Clone> Grid<T> {
  /// Copies out the `width` x `height` rectangle whose top-left corner is
  /// `origin`.
  pub fn sub_grid(&self, origin: Pos, width: u32, height: u32) -> XWordResult<Self> {
    let far_corner = Pos {
      x: origin.x + width as i32 - 1,
      y: origin.y + height as i32 - 1,
    };
    if width != 0 && height != 0 && !(self.in_bounds(origin) && self.in_bounds(far_corner)) {
      return Err(XWordError::Internal(format!(
        "Sub-grid {origin}..={far_corner} does not fit in a {}x{} grid",
        self.width, self.height
      )));
    }

    let tiles = (0..height as i32)
      .flat_map(|y| (0..width as i32).map(move |x| Pos { x: origin.x + x, y: origin.y + y }))
      .map(|pos| {
        self
          .get(pos)
          .cloned()
          .ok_or_else(|| XWordError::Internal(format!("Position {pos} is out of bounds")))
      })
      .collect::<XWordResult<Vec<_>>>()?;
    Self::from_vec(tiles, width, height)
  }
}

impl<T> Grid<T>
where
  T: Default,
{
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      grid: (0..width as usize * height as usize)
        .map(|_| T::default())
        .collect(),
      width,
      height,
    }
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.x >= 0 && pos.x < self.width() as i32 && pos.y >= 0 && pos.y < self.height() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self
      .in_bounds(pos)
      .then(|| self.grid.get(self.idx(pos)))
      .flatten()
  }
}

impl<T> MutGridlike<T> for Grid<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self
      .in_bounds(pos)
      .then(|| {
        let index = self.idx(pos);
        self.grid.get_mut(index)
      })
      .flatten()
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.rows().try_fold((), |_, row| {
      row.iter().try_fold((), |_, t| write!(f, "{t:?} "))?;
      writeln!(f)
    })
  }
}

impl<T: Display> Display for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.rows().try_fold((), |_, row| {
      row.iter().try_fold((), |_, t| write!(f, "{t} "))?;
      writeln!(f)
    })
  }
}

/// A view of a grid with rows and columns swapped. Lets column-wise logic be
/// written once, as row-wise logic.
pub struct TransposeGrid<'a, T> {
  grid: &'a Grid<T>,
}

impl<T> Gridlike<T> for TransposeGrid<'_, T> {
  fn width(&self) -> u32 {
    self.grid.height()
  }

  fn height(&self) -> u32 {
    self.grid.width()
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    self.grid.in_bounds(pos.transpose())
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self.grid.get(pos.transpose())
  }
}

pub struct MutTransposeGrid<'a, T> {
  grid: &'a mut Grid<T>,
}

impl<T> Gridlike<T> for MutTransposeGrid<'_, T> {
  fn width(&self) -> u32 {
    self.grid.height()
  }

  fn height(&self) -> u32 {
    self.grid.width()
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    self.grid.in_bounds(pos.transpose())
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self.grid.get(pos.transpose())
  }
}

impl<T> MutGridlike<T> for MutTransposeGrid<'_, T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self.grid.get_mut(pos.transpose())
  }
}
