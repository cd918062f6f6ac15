//! Co-appearance module - the accumulated relation between characters.
//!
//! The relation consists of:
//! - **Scene ids**: Opaque tags naming one scene of one act
//! - **Rows**: One per recognized cast member, listing partners
//! - **Coappearances**: The scenes a character shared with one partner

mod graph;
mod scene;

pub use graph::*;
pub use scene::*;
