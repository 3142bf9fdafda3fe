//! HTTP handlers.

pub mod rules;
pub mod vocab;
