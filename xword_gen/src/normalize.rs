use common::crossword::WordInput;
use util::error::{XWordError, XWordResult};

/// Upper-cases `answer` and keeps only the letters A-Z.
pub fn normalize_answer(answer: &str) -> String {
  answer
    .chars()
    .flat_map(char::to_uppercase)
    .filter(char::is_ascii_uppercase)
    .collect()
}

/// Cleans up raw input, dropping any entry left without an answer or a clue.
/// Surviving entries keep their relative order.
pub fn normalize_words(inputs: &[WordInput]) -> Vec<WordInput> {
  inputs
    .iter()
    .filter_map(|input| {
      let answer = normalize_answer(&input.answer);
      let clue = input.clue.trim();
      if answer.is_empty() || clue.is_empty() {
        log::debug!(
          "Skipping entry {:?} / {:?}: empty answer or clue",
          input.answer,
          input.clue
        );
        return None;
      }
      Some(WordInput::new(answer, clue))
    })
    .collect()
}

pub fn require_min_words(words: &[WordInput], required: usize) -> XWordResult {
  if words.len() < required {
    return Err(XWordError::InsufficientWords { required, found: words.len() });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use common::crossword::WordInput;
  use googletest::prelude::*;
  use util::error::XWordError;

  use super::{normalize_answer, normalize_words, require_min_words};

  #[gtest]
  fn test_normalize_answer() {
    assert_eq!(normalize_answer("ice cream"), "ICECREAM");
    assert_eq!(normalize_answer(" Rock-'n'-Roll 2! "), "ROCKNROLL");
    assert_eq!(normalize_answer("straße"), "STRASSE");
    assert_eq!(normalize_answer("café"), "CAF");
    assert_eq!(normalize_answer("1234"), "");
  }

  #[gtest]
  fn test_normalize_words_drops_empties() {
    let words = normalize_words(&[
      WordInput::new("sun", "  star "),
      WordInput::new("42", "number"),
      WordInput::new("moon", ""),
      WordInput::new("", "nothing"),
      WordInput::new("Mars", "planet"),
    ]);

    expect_that!(words.len(), eq(2));
    assert_eq!(words[0], WordInput::new("SUN", "star"));
    assert_eq!(words[1], WordInput::new("MARS", "planet"));
  }

  #[gtest]
  fn test_require_min_words() {
    let words = [WordInput::new("SUN", "star")];
    expect_that!(require_min_words(&words, 1), ok(anything()));

    let result = require_min_words(&words, 2);
    expect_true!(matches!(
      result,
      Err(XWordError::InsufficientWords { required: 2, found: 1 })
    ));
  }
}
