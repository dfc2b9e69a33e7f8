//! Domain layer: issue and comment models, the log/relation row shapes,
//! configuration types, errors, and the port the fetchers depend on.

pub mod errors;
pub mod models;
pub mod ports;
