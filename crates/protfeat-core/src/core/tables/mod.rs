//! Static residue tables: scalar scales, ionisation constants and the charge-class partition.
//!
//! Everything here is immutable and resolved at compile time through `phf`.

pub mod groups;
pub mod pka;
pub mod scales;

/// The 20 standard amino acids in the order used for composition keys.
pub const STANDARD_AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";
