//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under stable module names and hosts the pieces
//! of session wiring that are shared between the binary and the tests: command
//! line configuration and the tick source.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod ticker;
