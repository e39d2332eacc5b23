//! Domain layer: entities and query outcomes
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;

pub use entities::{Line, Outcome, Stop};
