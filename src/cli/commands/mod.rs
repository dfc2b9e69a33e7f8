//! Command implementations.

pub mod export;
pub mod refs;
pub mod relations;
