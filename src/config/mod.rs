//! Configuration for msgtpl.
//!
//! This module defines the Config struct that represents `config.yaml` in the
//! data directory. Unknown keys are ignored, every key has a default, and a
//! missing file means "all defaults".

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{CONFIG_FILE_NAME, Config};
