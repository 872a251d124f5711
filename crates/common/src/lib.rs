//! Shared helpers for the PocketWork crates: logging setup, runtime
//! environment checks and small wire types.

pub mod types;
pub mod utils;
pub mod env;
