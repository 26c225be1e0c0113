//! The flat, serializable crossword format handed to persistence and to
//! play-mode renderers.

use bitcode::{Decode, Encode};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use util::{
  error::{XWordError, XWordResult},
  grid::{Grid, Gridlike, MutGridlike},
  pos::Pos,
};

use crate::crossword::{Direction, PlacedWord, XWordTile};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct GameCell {
  pub x: u32,
  pub y: u32,
  pub is_black: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<char>,
  /// Only set on cells that start at least one word.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct GameClue {
  pub number: u32,
  pub question: String,
  pub answer: String,
  pub length: u32,
  pub start_x: u32,
  pub start_y: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct GameClues {
  pub across: Vec<GameClue>,
  pub down: Vec<GameClue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct CrosswordGameData {
  pub title: String,
  pub grid_rows: u32,
  pub grid_cols: u32,
  pub cells: Vec<GameCell>,
  pub clues: GameClues,
}

fn coordinate(value: i32, what: &str) -> XWordResult<u32> {
  u32::try_from(value)
    .map_err(|_| XWordError::Internal(format!("Negative {what} {value} in a cropped layout")))
}

impl GameClue {
  fn from_placed(word: &PlacedWord) -> XWordResult<Self> {
    Ok(Self {
      number: word.number,
      question: word.clue.clone(),
      answer: word.answer.clone(),
      length: word.len() as u32,
      start_x: coordinate(word.col(), "column")?,
      start_y: coordinate(word.row(), "row")?,
    })
  }
}

impl CrosswordGameData {
  /// Builds the payload for a cropped, renumbered layout.
  ///
  /// `placed` is expected in reading order, which is what the renumbering
  /// step produces. A cell's number is taken from the first word starting
  /// there.
  pub fn from_layout(
    title: &str,
    grid: &Grid<XWordTile>,
    placed: &[PlacedWord],
  ) -> XWordResult<Self> {
    let title = title.trim();
    if title.is_empty() {
      return Err(XWordError::MissingTitle);
    }
    if grid.height() == 0 || grid.width() == 0 {
      return Err(XWordError::NoWordsPlaceable);
    }

    let cells = grid
      .positions()
      .map(|pos| {
        let tile = grid
          .get(pos)
          .ok_or_else(|| XWordError::Internal(format!("Position {pos} is out of bounds")))?;
        Ok(GameCell {
          x: coordinate(pos.x, "column")?,
          y: coordinate(pos.y, "row")?,
          is_black: tile.is_black(),
          value: tile.letter(),
          number: placed
            .iter()
            .find(|word| word.pos == pos)
            .map(|word| word.number),
        })
      })
      .collect::<XWordResult<Vec<_>>>()?;

    let clues_in = |direction: Direction| -> XWordResult<Vec<GameClue>> {
      placed
        .iter()
        .filter(|word| word.direction == direction)
        .map(GameClue::from_placed)
        .collect()
    };

    Ok(Self {
      title: title.to_owned(),
      grid_rows: grid.height(),
      grid_cols: grid.width(),
      cells,
      clues: GameClues {
        across: clues_in(Direction::Across)?,
        down: clues_in(Direction::Down)?,
      },
    })
  }

  /// Rebuilds the board from the flat cell list. Cells missing from the list
  /// are black, and cells outside the declared dimensions are ignored.
  pub fn tile_matrix(&self) -> Grid<XWordTile> {
    let mut grid = Grid::new(self.grid_cols, self.grid_rows);
    for cell in &self.cells {
      let pos = Pos { x: cell.x as i32, y: cell.y as i32 };
      if let Some(tile) = grid.get_mut(pos) {
        *tile = match (cell.is_black, cell.value) {
          (false, Some(letter)) => XWordTile::Letter(letter),
          _ => XWordTile::Black,
        };
      }
    }
    grid
  }

  /// Clue numbers keyed by their start cell, in reading order.
  pub fn numbered_cells(&self) -> Vec<(Pos, u32)> {
    self
      .cells
      .iter()
      .filter_map(|cell| {
        cell
          .number
          .map(|number| (Pos { x: cell.x as i32, y: cell.y as i32 }, number))
      })
      .sorted_by_key(|(pos, _)| pos.reading_order())
      .collect()
  }

  pub fn word_count(&self) -> usize {
    self.clues.across.len() + self.clues.down.len()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::{
    error::XWordError,
    grid::{Grid, Gridlike},
    pos::Pos,
  };

  use crate::crossword::{Direction, PlacedWord, XWordTile};

  use super::CrosswordGameData;

  /// CAT across from the top-left corner, CAR down from the same cell.
  fn cat_car() -> (Grid<XWordTile>, Vec<PlacedWord>) {
    let tiles = ["CAT", "A##", "R##"]
      .iter()
      .flat_map(|row| row.chars())
      .map(|c| if c == '#' { XWordTile::Black } else { XWordTile::Letter(c) })
      .collect();
    let grid = Grid::from_vec(tiles, 3, 3).unwrap();
    let placed = vec![
      PlacedWord {
        answer: "CAT".to_owned(),
        clue: "pet".to_owned(),
        pos: Pos::zero(),
        direction: Direction::Across,
        number: 1,
      },
      PlacedWord {
        answer: "CAR".to_owned(),
        clue: "vehicle".to_owned(),
        pos: Pos::zero(),
        direction: Direction::Down,
        number: 2,
      },
    ];
    (grid, placed)
  }

  #[gtest]
  fn test_from_layout() {
    let (grid, placed) = cat_car();
    let data = CrosswordGameData::from_layout("  Animals ", &grid, &placed).unwrap();

    assert_eq!(data.title, "Animals");
    expect_that!(data.grid_rows, eq(3));
    expect_that!(data.grid_cols, eq(3));
    expect_that!(data.cells.len(), eq(9));
    expect_that!(data.word_count(), eq(2));

    let first = &data.cells[0];
    expect_that!((first.x, first.y), eq((0, 0)));
    expect_false!(first.is_black);
    expect_that!(first.value, some(eq('C')));
    expect_that!(first.number, some(eq(1)));

    let black = &data.cells[4];
    expect_that!((black.x, black.y), eq((1, 1)));
    expect_true!(black.is_black);
    expect_that!(black.value, none());
    expect_that!(black.number, none());

    let across = &data.clues.across;
    expect_that!(across.len(), eq(1));
    assert_eq!(across[0].question, "pet");
    expect_that!(across[0].length, eq(3));

    let down = &data.clues.down;
    expect_that!(down.len(), eq(1));
    expect_that!(down[0].number, eq(2));
    expect_that!((down[0].start_x, down[0].start_y), eq((0, 0)));
  }

  #[gtest]
  fn test_from_layout_requires_title() {
    let (grid, placed) = cat_car();
    let result = CrosswordGameData::from_layout("   ", &grid, &placed);
    expect_true!(matches!(result, Err(XWordError::MissingTitle)));
  }

  #[gtest]
  fn test_from_layout_rejects_empty_grid() {
    let grid = Grid::from_vec(vec![], 0, 0).unwrap();
    let result = CrosswordGameData::from_layout("Empty", &grid, &[]);
    expect_true!(matches!(result, Err(XWordError::NoWordsPlaceable)));
  }

  #[gtest]
  fn test_tile_matrix_round_trip() {
    let (grid, placed) = cat_car();
    let data = CrosswordGameData::from_layout("Animals", &grid, &placed).unwrap();
    expect_true!(data.tile_matrix() == grid);
  }

  #[gtest]
  fn test_tile_matrix_defaults_to_black() {
    let (grid, placed) = cat_car();
    let mut data = CrosswordGameData::from_layout("Animals", &grid, &placed).unwrap();
    data.cells.retain(|cell| (cell.x, cell.y) != (2, 0));
    data.cells[0].x = 17;

    let matrix = data.tile_matrix();
    expect_that!(matrix.get(Pos { x: 2, y: 0 }).copied(), some(eq(XWordTile::Black)));
    expect_that!(matrix.get(Pos::zero()).copied(), some(eq(XWordTile::Black)));
    expect_that!(matrix.get(Pos { x: 1, y: 0 }).copied(), some(eq(XWordTile::Letter('A'))));
  }

  #[gtest]
  fn test_numbered_cells() {
    let (grid, placed) = cat_car();
    let data = CrosswordGameData::from_layout("Animals", &grid, &placed).unwrap();
    expect_that!(data.numbered_cells(), container_eq([(Pos::zero(), 1)]));
  }

  #[gtest]
  fn test_json_omits_absent_fields() {
    let (grid, placed) = cat_car();
    let data = CrosswordGameData::from_layout("Animals", &grid, &placed).unwrap();
    let json = serde_json::to_value(&data).unwrap();

    let black = &json["cells"][4];
    expect_that!(black["is_black"].as_bool(), some(eq(true)));
    expect_true!(black.get("value").is_none());
    expect_true!(black.get("number").is_none());
    expect_that!(json["cells"][0]["value"].as_str(), some(eq("C")));
    expect_that!(json["clues"]["down"][0]["answer"].as_str(), some(eq("CAR")));

    let decoded: CrosswordGameData = serde_json::from_value(json).unwrap();
    expect_true!(decoded == data);
  }
}
