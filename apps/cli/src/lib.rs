//! Terminal client for the vocabulary trainer backend.

pub mod client;
pub mod session;
pub mod terminal;
