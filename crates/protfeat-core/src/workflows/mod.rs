//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::engine`] and [`crate::core`] layers together.
//!
//! - [`extract`] - Reads a labelled sequence dataset, computes the configured features for every
//!   record and writes the feature matrix. Progress is reported through a
//!   [`ProgressReporter`](crate::engine::progress::ProgressReporter) so that callers can render
//!   it however they like.
//!
//! ```no_run
//! use protfeat::engine::config::ExtractionConfigBuilder;
//! use protfeat::engine::progress::ProgressReporter;
//! use protfeat::workflows::extract;
//! use std::path::PathBuf;
//!
//! let config = ExtractionConfigBuilder::new()
//!     .input_path(PathBuf::from("dataset.csv"))
//!     .output_path(PathBuf::from("features.csv"))
//!     .build()?;
//! let summary = extract::run(&config, &ProgressReporter::new())?;
//! println!("{} rows written", summary.rows);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod extract;
