use super::error::DescriptorError;
use crate::core::models::features::FeatureRow;
use crate::core::tables::scales::{KYTE_DOOLITTLE, residue_value};

/// Mean, maximum and minimum Kyte-Doolittle hydropathy over the residues of `sequence`.
///
/// Residues outside the scale score `0.0`.
pub fn hydrophobicity(sequence: &str) -> Result<FeatureRow, DescriptorError> {
    let mut values = sequence.chars().map(|c| residue_value(&KYTE_DOOLITTLE, c));
    let first = values.next().ok_or(DescriptorError::EmptySequence {
        descriptor: "hydrophobicity",
    })?;

    let (sum, max, min, n) = values.fold((first, first, first, 1usize), |(s, hi, lo, n), v| {
        (s + v, hi.max(v), lo.min(v), n + 1)
    });

    let mut block = FeatureRow::with_capacity(3);
    block.set("Hydro_mean", sum / n as f64);
    block.set("Hydro_max", max);
    block.set("Hydro_min", min);
    Ok(block)
}
