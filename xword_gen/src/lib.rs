#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod crop;
pub mod generator;
pub mod layout;
pub mod normalize;
pub mod numbering;

pub use generator::{generate_layout, CrosswordLayout, LayoutConfig, PartialPlacementWarning};
