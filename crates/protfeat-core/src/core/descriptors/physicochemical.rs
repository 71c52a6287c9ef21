use crate::core::models::features::FeatureRow;
use crate::core::tables::scales::{
    COIL_PROPENSITY, FLEXIBILITY, HELIX_PROPENSITY, POLARITY, SHEET_PROPENSITY, residue_value,
};
use phf::Map;

#[rustfmt::skip]
static AVERAGED_SCALES: [(&str, &Map<char, f64>); 5] = [
    ("Polarity",         &POLARITY),
    ("Flexibility",      &FLEXIBILITY),
    ("Helix_Propensity", &HELIX_PROPENSITY),
    ("Sheet_Propensity", &SHEET_PROPENSITY),
    ("Coil_Propensity",  &COIL_PROPENSITY),
];

/// Per-residue averages of polarity, flexibility and the three secondary-structure propensities.
///
/// The sequence is upper-cased first. An empty sequence yields an empty block.
pub fn physicochemical(sequence: &str) -> FeatureRow {
    let residues: Vec<char> = sequence.chars().map(|c| c.to_ascii_uppercase()).collect();
    if residues.is_empty() {
        return FeatureRow::new();
    }

    let n = residues.len() as f64;
    let mut block = FeatureRow::with_capacity(AVERAGED_SCALES.len());
    for (name, scale) in &AVERAGED_SCALES {
        let total: f64 = residues.iter().map(|&c| residue_value(scale, c)).sum();
        block.set(*name, total / n);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn averages_are_computed_in_key_order() {
        let block = physicochemical("AR");
        let keys: Vec<_> = block.keys().collect();
        assert_eq!(
            keys,
            vec![
                "Polarity",
                "Flexibility",
                "Helix_Propensity",
                "Sheet_Propensity",
                "Coil_Propensity"
            ]
        );
        let polarity = block.get("Polarity").and_then(|v| v.as_f64()).unwrap();
        assert!(f64_approx_equal(polarity, 26.0));
    }

    #[test]
    fn lowercase_input_matches_uppercase() {
        assert_eq!(physicochemical("mkrag"), physicochemical("MKRAG"));
    }

    #[test]
    fn unknown_residues_dilute_the_average() {
        let helix = physicochemical("AX")
            .get("Helix_Propensity")
            .and_then(|v| v.as_f64())
            .unwrap();
        assert!(f64_approx_equal(helix, 1.45 / 2.0));
    }

    #[test]
    fn empty_sequence_yields_empty_block() {
        assert!(physicochemical("").is_empty());
    }
}
