use common::crossword::{Direction, PlacedWord, WordInput};
use itertools::Itertools;
use util::{
  error::{XWordError, XWordResult},
  grid::{Grid, Gridlike, MutGridlike},
  pos::{Diff, Pos},
};

/// The outcome of placing words on the virtual grid, before cropping.
#[derive(Clone, Debug)]
pub struct Placement {
  pub grid: Grid<Option<char>>,
  /// Words in the order they were placed, numbered provisionally.
  pub placed: Vec<PlacedWord>,
  /// Words for which no valid position was found.
  pub dropped: Vec<WordInput>,
}

fn is_open<G: Gridlike<Option<char>>>(grid: &G, pos: Pos) -> bool {
  grid.get(pos).is_none_or(|tile| tile.is_none())
}

/// Whether `letters` can be written left-to-right starting at `start`.
///
/// Letters may only land on empty tiles or on tiles already holding the same
/// letter. A newly filled tile may not have a letter directly above or below
/// it, and the tiles just before and just after the word must be empty, so the
/// word never runs alongside or into another one.
fn fits_across<G: Gridlike<Option<char>>>(grid: &G, letters: &[char], start: Pos) -> bool {
  let end = start + Diff::DX * letters.len() as i32;
  if letters.is_empty() || !grid.in_bounds(start) || !grid.in_bounds(end - Diff::DX) {
    return false;
  }

  letters.iter().enumerate().all(|(idx, &letter)| {
    let pos = start + Diff::DX * idx as i32;
    match grid.get(pos) {
      Some(Some(existing)) => *existing == letter,
      Some(None) => is_open(grid, pos - Diff::DY) && is_open(grid, pos + Diff::DY),
      None => false,
    }
  }) && is_open(grid, start - Diff::DX)
    && is_open(grid, end)
}

fn write_across<G: MutGridlike<Option<char>>>(
  grid: &mut G,
  letters: &[char],
  start: Pos,
) -> XWordResult {
  letters.iter().enumerate().try_for_each(|(idx, &letter)| {
    let pos = start + Diff::DX * idx as i32;
    let tile = grid
      .get_mut(pos)
      .ok_or_else(|| XWordError::Internal(format!("Position {pos} is out of bounds")))?;
    *tile = Some(letter);
    Ok(())
  })
}

/// Greedy first-fit placement of words onto a square grid.
pub struct LayoutEngine {
  grid: Grid<Option<char>>,
  placed: Vec<PlacedWord>,
  dropped: Vec<WordInput>,
}

impl LayoutEngine {
  pub fn new(grid_size: u32) -> Self {
    Self {
      grid: Grid::new(grid_size, grid_size),
      placed: vec![],
      dropped: vec![],
    }
  }

  pub fn grid(&self) -> &Grid<Option<char>> {
    &self.grid
  }

  pub fn can_place(&self, letters: &[char], start: Pos, direction: Direction) -> bool {
    match direction {
      Direction::Across => fits_across(&self.grid, letters, start),
      Direction::Down => fits_across(&self.grid.transpose(), letters, start.transpose()),
    }
  }

  fn write(&mut self, letters: &[char], start: Pos, direction: Direction) -> XWordResult {
    match direction {
      Direction::Across => write_across(&mut self.grid, letters, start),
      Direction::Down => write_across(&mut self.grid.transpose_mut(), letters, start.transpose()),
    }
  }

  fn commit(&mut self, word: &WordInput, start: Pos, direction: Direction) -> XWordResult {
    let letters = word.answer.chars().collect_vec();
    self.write(&letters, start, direction)?;

    let number = self.placed.len() as u32 + 1;
    log::debug!("Placed #{number} {} {direction} at {start}", word.answer);
    self.placed.push(PlacedWord {
      answer: word.answer.clone(),
      clue: word.clue.clone(),
      pos: start,
      direction,
      number,
    });
    Ok(())
  }

  /// Finds the first valid spot for `letters`, scanning filled tiles in
  /// reading order. At each tile, every index of `letters` holding the same
  /// letter is tried, down before across.
  pub fn find_position(&self, letters: &[char]) -> Option<(Pos, Direction)> {
    self
      .grid
      .positions()
      .filter_map(|pos| self.grid.get(pos).cloned().flatten().map(|tile| (pos, tile)))
      .flat_map(|(pos, tile)| {
        letters
          .iter()
          .positions(move |&letter| letter == tile)
          .map(move |idx| (pos, idx as i32))
      })
      .flat_map(|(pos, idx)| {
        [Direction::Down, Direction::Across]
          .into_iter()
          .map(move |direction| (pos - direction.step() * idx, direction))
      })
      .find(|&(start, direction)| self.can_place(letters, start, direction))
  }

  /// Places the anchor word across the middle row, horizontally centered.
  pub fn place_anchor(&mut self, word: &WordInput) -> XWordResult {
    let length = word.answer.chars().count();
    let grid_size = self.grid.width();
    if length > grid_size as usize {
      return Err(XWordError::WordTooLong {
        word: word.answer.clone(),
        length,
        grid_size,
      });
    }

    let start = Pos::new(
      (grid_size / 2) as i32,
      ((grid_size as usize - length) / 2) as i32,
    );
    self.commit(word, start, Direction::Across)
  }

  /// Places `word` at its first valid position, or records it as dropped.
  /// Returns whether the word was placed.
  pub fn place(&mut self, word: &WordInput) -> XWordResult<bool> {
    let letters = word.answer.chars().collect_vec();
    match self.find_position(&letters) {
      Some((start, direction)) => {
        self.commit(word, start, direction)?;
        Ok(true)
      }
      None => {
        log::debug!("No valid position for {}, dropping it", word.answer);
        self.dropped.push(word.clone());
        Ok(false)
      }
    }
  }

  pub fn finish(self) -> Placement {
    Placement {
      grid: self.grid,
      placed: self.placed,
      dropped: self.dropped,
    }
  }
}

/// Lays out normalized words on a `grid_size` square grid.
///
/// Words are considered longest first, keeping input order among words of
/// equal length. The longest word anchors the grid and every later word takes
/// the first valid position found; nothing is ever moved once placed.
pub fn place_words(words: &[WordInput], grid_size: u32) -> XWordResult<Placement> {
  let sorted = words
    .iter()
    .sorted_by_key(|word| std::cmp::Reverse(word.answer.chars().count()))
    .collect_vec();
  let (anchor, rest) = sorted.split_first().ok_or(XWordError::NoWordsPlaceable)?;

  let mut engine = LayoutEngine::new(grid_size);
  engine.place_anchor(anchor)?;
  for word in rest {
    engine.place(word)?;
  }
  Ok(engine.finish())
}
