//! # Stage Core (The Prompter)
//!
//! Follows a play scene by scene, keeping track of who is on stage, and
//! records every pair of characters who share it. This crate consumes the
//! tables in `cast_rules` and the raw text of each scene; loading the play
//! and reporting the results are left to the caller.
//!
//! ## Core Components
//!
//! - **directions**: Typed stage directions extracted from scene text
//! - **stage**: The presence state machine that applies them
//! - **coappearance**: The symmetric co-appearance graph it records into
//! - **play**: Runs every scene of every act through one stage
//!
//! ## Design Philosophy
//!
//! - **Best Effort**: Directions that do not fit the stage are reported and skipped, never fatal
//! - **Data-Driven**: Play-specific names and groups live in configuration, not in the engine
//! - **Scene-Local**: Presence never carries between scenes; only the graph accumulates

pub mod coappearance;
pub mod directions;
pub mod play;
pub mod stage;

pub use coappearance::*;
pub use directions::*;
pub use play::*;
pub use stage::*;
