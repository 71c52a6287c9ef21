//! # Core Module
//!
//! The stateless foundation of protfeat: data models, static residue tables, descriptor
//! algorithms, tabular I/O and the embedding contract.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Protein records, feature values, rows and tables
//! - **Residue Tables** ([`tables`]) - Compile-time scales, pKa sets and the charge-class partition
//! - **Descriptors** ([`descriptors`]) - Composition, charge, hydropathy, physicochemical, CTD,
//!   motif and isoelectric point blocks
//! - **Embeddings** ([`embedding`]) - The `Embedder` contract and, with the `protbert` feature,
//!   a ProtBert implementation
//! - **File I/O** ([`io`]) - CSV reading of the labelled dataset and writing of the feature matrix
//!
//! Nothing in this module keeps state between calls; every descriptor is a pure function of its
//! input sequence (and, for charge and motifs, of its configuration).

pub mod descriptors;
pub mod embedding;
pub mod io;
pub mod models;
pub mod tables;
