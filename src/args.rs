use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use xword_gen::{
  generator::{DEFAULT_GRID_SIZE, DEFAULT_MIN_WORDS},
  LayoutConfig,
};

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
  /// One `answer<TAB>clue` per line.
  Tsv,
  /// An array of `{"answer": ..., "clue": ...}` objects.
  Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
  Text,
  Json,
  Bin,
}

/// Lays out a list of answers and clues as a crossword.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  /// Word list to lay out.
  pub input: PathBuf,

  #[arg(long, default_value = "tsv")]
  pub input_format: InputFormat,

  #[arg(long)]
  pub title: String,

  /// Side length of the working grid the words are placed on.
  #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
  pub grid_size: u32,

  /// Fail unless at least this many entries have both an answer and a clue.
  #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
  pub min_words: usize,

  #[arg(long, default_value = "text")]
  pub format: OutputFormat,

  /// Write here instead of stdout.
  #[arg(long, short)]
  pub output: Option<PathBuf>,

  /// Leave letters out of the text rendering.
  #[arg(long)]
  pub blank: bool,

  #[arg(long)]
  pub debug: bool,
}

impl Args {
  pub fn layout_config(&self) -> LayoutConfig {
    LayoutConfig {
      grid_size: self.grid_size,
      min_words: self.min_words,
    }
  }
}
