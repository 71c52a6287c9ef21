use crate::core::models::features::FeatureRow;
use crate::core::tables::pka::{Ionization, NET_CHARGE_PKA, PkaTable, partial_charge};

pub const DEFAULT_PH: f64 = 7.0;

/// Net charge of a peptide under `table` at `ph`.
///
/// Each terminus contributes exactly once, even for an empty sequence; each ionisable side chain
/// contributes once per occurrence. Residues are matched case-insensitively.
pub fn net_charge_with(sequence: &str, ph: f64, table: &PkaTable) -> f64 {
    let termini = partial_charge(Ionization::Basic, table.n_terminus, ph)
        + partial_charge(Ionization::Acidic, table.c_terminus, ph);

    sequence
        .chars()
        .filter_map(|c| table.side_chains.get(&c.to_ascii_uppercase()))
        .fold(termini, |acc, &(ionization, pka)| {
            acc + partial_charge(ionization, pka, ph)
        })
}

/// `Charge` block: Henderson-Hasselbalch net charge at `ph`.
pub fn net_charge(sequence: &str, ph: f64) -> FeatureRow {
    let mut block = FeatureRow::with_capacity(1);
    block.set("Charge", net_charge_with(sequence, ph, &NET_CHARGE_PKA));
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn charge(sequence: &str, ph: f64) -> f64 {
        net_charge(sequence, ph).get("Charge").and_then(|v| v.as_f64()).unwrap()
    }

    #[test]
    fn dilysine_matches_closed_form() {
        let ph = 7.0;
        let expected = 1.0 / (1.0 + 10f64.powf(ph - 9.69))
            + 2.0 / (1.0 + 10f64.powf(ph - 10.53))
            - 1.0 / (1.0 + 10f64.powf(2.34 - ph));
        assert!(f64_approx_equal(charge("KK", ph), expected));
    }

    #[test]
    fn empty_sequence_carries_only_terminal_charge() {
        let ph = DEFAULT_PH;
        let expected = 1.0 / (1.0 + 10f64.powf(ph - 9.69)) - 1.0 / (1.0 + 10f64.powf(2.34 - ph));
        assert!(f64_approx_equal(charge("", ph), expected));
    }

    #[test]
    fn acidic_peptide_is_negative_and_basic_peptide_positive() {
        assert!(charge("DDEEDE", 7.0) < -5.0);
        assert!(charge("KRKRKR", 7.0) > 5.0);
    }

    #[test]
    fn lowercase_residues_are_titrated() {
        assert!(f64_approx_equal(charge("kk", 7.0), charge("KK", 7.0)));
    }

    #[test]
    fn charge_decreases_with_ph() {
        let seq = "MKHDEYCR";
        assert!(charge(seq, 3.0) > charge(seq, 7.0));
        assert!(charge(seq, 7.0) > charge(seq, 11.0));
    }
}
