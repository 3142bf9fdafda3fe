//! Services backing the HTTP handlers.

pub mod assets;
pub mod seed;
