#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod input;
mod logging;
mod render;

use std::{
  fs::File,
  io::{self, Write},
  process::ExitCode,
};

use args::{Args, OutputFormat};
use clap::Parser;
use common::game_data::CrosswordGameData;
use log::{debug, info, warn};
use util::{bitcode, error::DynResult, time::time_fn};
use xword_gen::generate_layout;

fn encode(data: &CrosswordGameData, args: &Args) -> DynResult<Vec<u8>> {
  Ok(match args.format {
    OutputFormat::Text => render::render_text(data, args.blank)?.into_bytes(),
    OutputFormat::Json => {
      let mut bytes = serde_json::to_vec_pretty(data)?;
      bytes.push(b'\n');
      bytes
    }
    OutputFormat::Bin => bitcode::encode(data),
  })
}

fn run(args: &Args) -> DynResult {
  let inputs = input::read_inputs(&args.input, args.input_format)?;
  info!("Read {} entries from {}", inputs.len(), args.input.display());

  let (elapsed, layout) = time_fn(|| generate_layout(&inputs, &args.layout_config()));
  let layout = layout?;
  debug!("Generated layout in {elapsed:?}");

  if let Some(warning) = layout.partial_placement_warning() {
    warn!("{warning}");
  }

  let data = CrosswordGameData::from_layout(&args.title, layout.grid(), layout.placed())?;
  info!(
    "Placed {} words on a {}x{} grid",
    data.word_count(),
    data.grid_cols,
    data.grid_rows
  );
  let bytes = encode(&data, args)?;

  match &args.output {
    Some(path) => {
      File::create(path)?.write_all(&bytes)?;
      info!("Wrote {}", path.display());
    }
    None => io::stdout().lock().write_all(&bytes)?,
  }
  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();
  logging::init_logger(args.debug);

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err}");
      ExitCode::FAILURE
    }
  }
}
