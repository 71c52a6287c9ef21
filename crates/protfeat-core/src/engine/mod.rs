//! # Engine Module
//!
//! The stateful layer between the stateless descriptors in [`crate::core`] and the public
//! workflows. It validates configuration, owns the pre-compiled resources of a run (motif
//! regexes, the pI estimator, an optional embedding model) and turns records into feature rows.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated builders for feature and extraction settings
//! - **Row Assembly** ([`assembler`]) - Ordered merging of descriptor blocks into one row per record
//! - **Progress Monitoring** ([`progress`]) - Callback-based phase and task reporting
//! - **Error Handling** ([`error`]) - Engine-level errors wrapping every lower layer
//!
//! ## Concurrency
//!
//! Rows are independent. With the `parallel` feature (enabled by default) the assembler computes
//! them on the rayon thread pool and collects them back in input order.

pub mod assembler;
pub mod config;
pub mod error;
pub mod progress;
