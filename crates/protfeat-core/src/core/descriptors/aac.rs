use super::error::DescriptorError;
use crate::core::models::features::FeatureRow;
use crate::core::tables::STANDARD_AMINO_ACIDS;

/// Fraction of each standard residue in `sequence`, keyed `AAC_<residue>`.
///
/// The denominator is the full sequence length, so non-standard symbols lower every fraction
/// and the block sums to less than one.
pub fn amino_acid_composition(sequence: &str) -> Result<FeatureRow, DescriptorError> {
    let length = sequence.chars().count();
    if length == 0 {
        return Err(DescriptorError::EmptySequence { descriptor: "aac" });
    }

    let mut counts = [0usize; 20];
    for residue in sequence.chars() {
        if let Some(i) = STANDARD_AMINO_ACIDS.find(residue) {
            counts[i] += 1;
        }
    }

    let mut block = FeatureRow::with_capacity(counts.len());
    for (aa, count) in STANDARD_AMINO_ACIDS.chars().zip(counts) {
        block.set(format!("AAC_{}", aa), count as f64 / length as f64);
    }
    Ok(block)
}
