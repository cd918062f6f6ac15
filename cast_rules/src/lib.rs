//! # Cast Rules
//!
//! The "Rule Book" crate - everything the stage engine needs to know about a
//! particular play, expressed as data. It holds the recognized cast, the
//! alias tables used to turn stage-direction names into canonical
//! characters, and the group substitutions some directions rely on.
//! This crate does not read play text.

pub mod aliases;
pub mod cast;
pub mod play_config;

pub use aliases::*;
pub use cast::*;
pub use play_config::*;
