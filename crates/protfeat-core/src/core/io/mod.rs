//! Reading the labelled sequence dataset and writing the feature matrix, both as CSV.

pub mod dataset;
pub mod features;
pub mod traits;
