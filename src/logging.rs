use std::env;

use log::LevelFilter;

/// Sets up `env_logger` at `Debug` when `debug_enabled`, `Info` otherwise.
/// `RUST_LOG`, when set, takes precedence.
pub fn init_logger(debug_enabled: bool) {
  let level = if debug_enabled {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };

  let mut builder = env_logger::Builder::new();
  builder
    .filter(None, level)
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false);

  if let Ok(spec) = env::var("RUST_LOG") {
    builder.parse_filters(&spec);
  }

  // Errors only if a logger is already installed.
  let _ = builder.try_init();
}
