//! Data models shared by the descriptor, I/O and engine layers.
//!
//! - [`record`] - Input dataset rows (`Protein_ID`, `Sequence`, `Label`).
//! - [`features`] - Feature values, insertion-ordered feature rows and the output table.

pub mod features;
pub mod record;
