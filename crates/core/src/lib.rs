//! Domain primitives shared by the notes server and its client.

pub mod error;
pub mod tags;
pub mod types;
pub mod validation;
