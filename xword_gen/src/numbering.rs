use common::crossword::PlacedWord;

/// Numbers words in reading order of their first letter, starting from 1.
/// Words sharing a start cell keep their relative order.
pub fn renumber(mut placed: Vec<PlacedWord>) -> Vec<PlacedWord> {
  placed.sort_by_key(|word| word.pos.reading_order());
  placed
    .into_iter()
    .enumerate()
    .map(|(idx, word)| PlacedWord { number: idx as u32 + 1, ..word })
    .collect()
}
