//! Input/Output for geometry runs
//!
//! Logging setup and the JSON scene export.

mod export;
mod output;

pub use export::export_scene;
pub use output::setup_output;
