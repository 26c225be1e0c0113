use std::{collections::HashMap, fmt::Write};

use common::{
  crossword::XWordTile,
  game_data::{CrosswordGameData, GameClue},
};
use itertools::Itertools;
use util::{
  grid::{Grid, Gridlike},
  pos::Pos,
};

fn cell_width(numbers: &HashMap<Pos, u32>) -> usize {
  let digits = numbers
    .values()
    .map(|number| number.to_string().len())
    .max()
    .unwrap_or(0);
  (digits + 1).max(3)
}

fn draw_grid(
  out: &mut String,
  grid: &Grid<XWordTile>,
  numbers: &HashMap<Pos, u32>,
  blank: bool,
) -> std::fmt::Result {
  let width = cell_width(numbers);
  let separator = format!(
    "+{}+",
    (0..grid.width()).map(|_| "-".repeat(width)).join("+")
  );

  writeln!(out, "{separator}")?;
  for (y, row) in grid.rows().enumerate() {
    out.push('|');
    for (x, tile) in row.iter().enumerate() {
      match tile {
        XWordTile::Black => out.push_str(&"#".repeat(width)),
        XWordTile::Letter(letter) => {
          let pos = Pos { x: x as i32, y: y as i32 };
          let number = numbers.get(&pos).map(u32::to_string).unwrap_or_default();
          let letter = if blank { ' ' } else { *letter };
          let pad = width - 1;
          write!(out, "{number:<pad$}{letter}")?;
        }
      }
      out.push('|');
    }
    writeln!(out)?;
    writeln!(out, "{separator}")?;
  }
  Ok(())
}

fn draw_clues(out: &mut String, heading: &str, clues: &[GameClue], blank: bool) -> std::fmt::Result {
  if clues.is_empty() {
    return Ok(());
  }
  writeln!(out)?;
  writeln!(out, "{heading}")?;
  for clue in clues {
    write!(out, "{:>3}. {} ({})", clue.number, clue.question, clue.length)?;
    if !blank {
      write!(out, " {}", clue.answer)?;
    }
    writeln!(out)?;
  }
  Ok(())
}

/// Draws the puzzle as plain text: the title, the numbered grid, then the
/// across and down clue lists. With `blank` set, letters and answers are left
/// out so the result can be solved on paper.
pub fn render_text(data: &CrosswordGameData, blank: bool) -> Result<String, std::fmt::Error> {
  let grid = data.tile_matrix();
  let numbers: HashMap<_, _> = data.numbered_cells().into_iter().collect();

  let mut out = String::new();
  writeln!(out, "{}", data.title)?;
  writeln!(out)?;
  draw_grid(&mut out, &grid, &numbers, blank)?;
  draw_clues(&mut out, "Across", &data.clues.across, blank)?;
  draw_clues(&mut out, "Down", &data.clues.down, blank)?;
  Ok(out)
}
