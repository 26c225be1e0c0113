use std::{fs, path::Path};

use common::crossword::WordInput;
use util::error::{DynResult, XWordError, XWordResult};

use crate::args::InputFormat;

/// Parses one `answer<TAB>clue` entry per line. Blank lines and lines starting
/// with `#` are skipped.
pub fn parse_tsv(contents: &str) -> XWordResult<Vec<WordInput>> {
  contents
    .lines()
    .enumerate()
    .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
    .map(|(idx, line)| {
      let (answer, clue) = line.split_once('\t').ok_or_else(|| {
        XWordError::Parse(format!(
          "Line {}: expected \"answer<TAB>clue\", got {line:?}",
          idx + 1
        ))
      })?;
      Ok(WordInput::new(answer, clue.trim_end_matches('\r')))
    })
    .collect()
}

pub fn parse_json(contents: &str) -> DynResult<Vec<WordInput>> {
  Ok(serde_json::from_str(contents)?)
}

pub fn read_inputs(path: &Path, format: InputFormat) -> DynResult<Vec<WordInput>> {
  let contents = fs::read_to_string(path)?;
  match format {
    InputFormat::Tsv => Ok(parse_tsv(&contents)?),
    InputFormat::Json => parse_json(&contents),
  }
}
