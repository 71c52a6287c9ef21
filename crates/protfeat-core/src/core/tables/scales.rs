//! Per-residue scalar scales keyed by one-letter code (upper case).
//!
//! Residues absent from a scale score `0.0`; see [`residue_value`].

use phf::{Map, phf_map};

/// Kyte-Doolittle hydropathy index.
#[rustfmt::skip]
pub static KYTE_DOOLITTLE: Map<char, f64> = phf_map! {
    'A' => 1.8,  'C' => 2.5,  'D' => -3.5, 'E' => -3.5, 'F' => 2.8,
    'G' => -0.4, 'H' => -3.2, 'I' => 4.5,  'K' => -3.9, 'L' => 3.8,
    'M' => 1.9,  'N' => -3.5, 'P' => -1.6, 'Q' => -3.5, 'R' => -4.5,
    'S' => -0.8, 'T' => -0.7, 'V' => 4.2,  'W' => -0.9, 'Y' => -1.3,
};

/// Zimmerman polarity.
#[rustfmt::skip]
pub static POLARITY: Map<char, f64> = phf_map! {
    'A' => 0.0,  'R' => 52.0, 'N' => 3.38, 'D' => 49.7, 'C' => 1.48,
    'Q' => 3.53, 'E' => 49.9, 'G' => 0.0,  'H' => 51.6, 'I' => 0.13,
    'L' => 0.13, 'K' => 49.5, 'M' => 1.43, 'F' => 0.35, 'P' => 1.58,
    'S' => 1.67, 'T' => 1.66, 'W' => 2.1,  'Y' => 1.61, 'V' => 0.13,
};

#[rustfmt::skip]
pub static FLEXIBILITY: Map<char, f64> = phf_map! {
    'A' => 0.36, 'R' => 0.52, 'N' => 0.46, 'D' => 0.51, 'C' => 0.35,
    'Q' => 0.49, 'E' => 0.50, 'G' => 0.54, 'H' => 0.32, 'I' => 0.46,
    'L' => 0.37, 'K' => 0.47, 'M' => 0.30, 'F' => 0.31, 'P' => 0.52,
    'S' => 0.51, 'T' => 0.44, 'W' => 0.31, 'Y' => 0.42, 'V' => 0.39,
};

/// Chou-Fasman alpha-helix propensity.
#[rustfmt::skip]
pub static HELIX_PROPENSITY: Map<char, f64> = phf_map! {
    'A' => 1.45, 'R' => 1.00, 'N' => 0.67, 'D' => 1.01, 'C' => 0.77,
    'Q' => 1.11, 'E' => 1.51, 'G' => 0.57, 'H' => 1.00, 'I' => 1.08,
    'L' => 1.34, 'K' => 1.07, 'M' => 1.20, 'F' => 1.12, 'P' => 0.57,
    'S' => 0.77, 'T' => 0.83, 'W' => 1.14, 'Y' => 0.61, 'V' => 1.06,
};

/// Chou-Fasman beta-sheet propensity.
#[rustfmt::skip]
pub static SHEET_PROPENSITY: Map<char, f64> = phf_map! {
    'A' => 0.97, 'R' => 0.90, 'N' => 0.89, 'D' => 0.54, 'C' => 1.30,
    'Q' => 1.10, 'E' => 0.37, 'G' => 0.75, 'H' => 0.87, 'I' => 1.60,
    'L' => 1.22, 'K' => 0.74, 'M' => 1.67, 'F' => 1.28, 'P' => 0.55,
    'S' => 0.75, 'T' => 1.19, 'W' => 1.19, 'Y' => 1.29, 'V' => 1.70,
};

/// Chou-Fasman coil propensity.
#[rustfmt::skip]
pub static COIL_PROPENSITY: Map<char, f64> = phf_map! {
    'A' => 0.97, 'R' => 0.95, 'N' => 1.34, 'D' => 1.46, 'C' => 1.30,
    'Q' => 0.98, 'E' => 0.74, 'G' => 1.56, 'H' => 0.95, 'I' => 0.47,
    'L' => 0.92, 'K' => 1.01, 'M' => 0.60, 'F' => 0.59, 'P' => 1.52,
    'S' => 1.43, 'T' => 0.96, 'W' => 0.88, 'Y' => 1.05, 'V' => 0.50,
};

#[inline]
pub fn residue_value(scale: &Map<char, f64>, residue: char) -> f64 {
    scale.get(&residue).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::STANDARD_AMINO_ACIDS;

    #[test]
    fn every_scale_covers_the_standard_alphabet() {
        for scale in [
            &KYTE_DOOLITTLE,
            &POLARITY,
            &FLEXIBILITY,
            &HELIX_PROPENSITY,
            &SHEET_PROPENSITY,
            &COIL_PROPENSITY,
        ] {
            assert_eq!(scale.len(), 20);
            for aa in STANDARD_AMINO_ACIDS.chars() {
                assert!(scale.contains_key(&aa), "missing residue {}", aa);
            }
        }
    }

    #[test]
    fn unknown_residues_score_zero() {
        assert_eq!(residue_value(&KYTE_DOOLITTLE, 'X'), 0.0);
        assert_eq!(residue_value(&KYTE_DOOLITTLE, 'a'), 0.0);
        assert_eq!(residue_value(&KYTE_DOOLITTLE, 'I'), 4.5);
    }
}
