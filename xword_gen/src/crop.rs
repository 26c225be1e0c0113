use common::crossword::{PlacedWord, XWordTile};
use util::{
  error::{XWordError, XWordResult},
  grid::Grid,
  pos::Pos,
};

/// Cuts the virtual grid down to the smallest rectangle holding every letter,
/// and shifts `placed` into the cropped coordinates. Empty tiles become black.
pub fn crop(
  grid: &Grid<Option<char>>,
  placed: Vec<PlacedWord>,
) -> XWordResult<(Grid<XWordTile>, Vec<PlacedWord>)> {
  let (min, max) = grid
    .bounding_box(|tile| tile.is_some())
    .ok_or(XWordError::NoWordsPlaceable)?;
  let width = (max.x - min.x + 1) as u32;
  let height = (max.y - min.y + 1) as u32;
  log::debug!("Cropping to {width}x{height} from {min}");

  let cropped = grid.sub_grid(min, width, height)?.map(|&tile| XWordTile::from(tile));
  let offset = min - Pos::zero();
  let placed = placed
    .into_iter()
    .map(|word| PlacedWord { pos: word.pos - offset, ..word })
    .collect();
  Ok((cropped, placed))
}
