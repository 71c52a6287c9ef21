//! # protfeat Core Library
//!
//! Numeric feature vectors for protein sequences, intended as input to downstream classifiers
//! (for example, separating membrane-binding proteins from the rest).
//!
//! For each sequence the library computes amino-acid composition, net charge, hydropathy
//! statistics, physicochemical averages, charge-class CTD descriptors, motif flags, the
//! isoelectric point and, optionally, a learned embedding, and writes one row per sequence.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data models, static residue tables, the descriptor
//!   algorithms, CSV I/O and the embedding contract.
//!
//! - **[`engine`]: The Logic Core.** Validated configuration, progress reporting and the row
//!   assembler that merges descriptor blocks, optionally in parallel.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures such as [`workflows::extract`],
//!   which loads a dataset, computes every row and writes the feature matrix.

pub mod core;
pub mod engine;
pub mod workflows;
