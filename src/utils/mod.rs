//! Utility modules shared across the codebase.

pub mod date;
pub mod hash;
pub mod path;
pub mod plural;

pub use plural::{counted, plural};
