use crate::core::models::features::FeatureRow;
use crate::core::tables::groups::ChargeGroup;

/// Percentiles at which the distribution descriptors sample each group's positions.
pub const DISTRIBUTION_PERCENTILES: [usize; 5] = [0, 25, 50, 75, 100];

/// Unordered group pairs in partition order; one transition counter each.
const TRANSITION_PAIRS: [(ChargeGroup, ChargeGroup); 3] = [
    (ChargeGroup::Positive, ChargeGroup::Negative),
    (ChargeGroup::Positive, ChargeGroup::Neutral),
    (ChargeGroup::Negative, ChargeGroup::Neutral),
];

fn transition_slot(a: ChargeGroup, b: ChargeGroup) -> Option<usize> {
    let pair = ChargeGroup::canonical_pair(a, b);
    TRANSITION_PAIRS.iter().position(|&p| p == pair)
}

/// Composition, transition and distribution descriptors over the charge-class partition.
///
/// Residues outside the partition are dropped before any counting, so all three families are
/// relative to the grouped length. Keys, in order:
///
/// - `CTDC_<group>`: fraction of grouped residues in each group.
/// - `CTDT_<a>_to_<b>`: fraction of group changes between adjacent residues that involve the
///   pair `{a, b}`, regardless of direction.
/// - `CTDD_<group>_<p>`: relative position of the residue found at the `p`-th percentile of the
///   group's occurrences, `0.0` when the group is absent.
///
/// An empty sequence returns an empty block; a sequence with no groupable residue returns the
/// full key set with every value at `0.0`.
pub fn ctd(sequence: &str) -> FeatureRow {
    if sequence.is_empty() {
        return FeatureRow::new();
    }

    let grouped: Vec<ChargeGroup> = sequence.chars().filter_map(ChargeGroup::of).collect();
    let total_len = grouped.len();

    let mut block = FeatureRow::with_capacity(
        ChargeGroup::ALL.len() * (1 + DISTRIBUTION_PERCENTILES.len()) + TRANSITION_PAIRS.len(),
    );

    let mut counts = [0usize; 3];
    for group in &grouped {
        counts[group.index()] += 1;
    }
    for group in ChargeGroup::ALL {
        block.set(
            format!("CTDC_{}", group),
            ratio(counts[group.index()], total_len),
        );
    }

    let mut transitions = [0usize; TRANSITION_PAIRS.len()];
    for window in grouped.windows(2) {
        if window[0] != window[1] {
            if let Some(slot) = transition_slot(window[0], window[1]) {
                transitions[slot] += 1;
            }
        }
    }
    let total_transitions = transitions.iter().sum::<usize>().max(1);
    for ((a, b), count) in TRANSITION_PAIRS.iter().zip(transitions) {
        block.set(
            format!("CTDT_{}_to_{}", a, b),
            ratio(count, total_transitions),
        );
    }

    for group in ChargeGroup::ALL {
        let positions: Vec<usize> = grouped
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == group)
            .map(|(i, _)| i + 1)
            .collect();
        for p in DISTRIBUTION_PERCENTILES {
            let value = if positions.is_empty() {
                0.0
            } else {
                let index = (positions.len() * p / 100).saturating_sub(1);
                ratio(positions[index], total_len)
            };
            block.set(format!("CTDD_{}_{}", group, p), value);
        }
    }

    block
}

#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn value(block: &FeatureRow, key: &str) -> f64 {
        block
            .get(key)
            .and_then(|v| v.as_f64())
            .unwrap_or_else(|| panic!("missing key {}", key))
    }

    fn sum_with_prefix(block: &FeatureRow, prefix: &str) -> f64 {
        block
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .filter_map(|(_, v)| v.as_f64())
            .sum()
    }

    #[test]
    fn block_has_fixed_key_set_in_partition_order() {
        let block = ctd("MKRAGKKLMRRQK");
        assert_eq!(block.len(), 3 + 3 + 15);
        let keys: Vec<_> = block.keys().collect();
        assert_eq!(
            &keys[..6],
            &[
                "CTDC_positive",
                "CTDC_negative",
                "CTDC_neutral",
                "CTDT_positive_to_negative",
                "CTDT_positive_to_neutral",
                "CTDT_negative_to_neutral",
            ]
        );
        assert_eq!(keys[6], "CTDD_positive_0");
        assert_eq!(keys[20], "CTDD_neutral_100");
    }

    #[test]
    fn composition_sums_to_one() {
        let block = ctd("MKDEAYHR");
        assert!(f64_approx_equal(sum_with_prefix(&block, "CTDC_"), 1.0));
        assert!(f64_approx_equal(value(&block, "CTDC_positive"), 3.0 / 8.0));
        assert!(f64_approx_equal(value(&block, "CTDC_negative"), 2.0 / 8.0));
    }

    #[test]
    fn transitions_credit_both_directions_to_one_pair() {
        // K->D, D->K, K->A: two positive/negative changes and one positive/neutral change.
        let block = ctd("KDKA");
        assert!(f64_approx_equal(
            value(&block, "CTDT_positive_to_negative"),
            2.0 / 3.0
        ));
        assert!(f64_approx_equal(
            value(&block, "CTDT_positive_to_neutral"),
            1.0 / 3.0
        ));
        assert!(f64_approx_equal(value(&block, "CTDT_negative_to_neutral"), 0.0));
        assert!(f64_approx_equal(sum_with_prefix(&block, "CTDT_"), 1.0));
    }

    #[test]
    fn homogeneous_sequence_has_no_transitions() {
        let block = ctd("AAAA");
        assert!(f64_approx_equal(sum_with_prefix(&block, "CTDT_"), 0.0));
    }

    #[test]
    fn distribution_samples_group_positions() {
        // Grouped: K A A K A A A K (positives at 1, 4, 8 of 8).
        let block = ctd("KAAKAAAK");
        assert!(f64_approx_equal(value(&block, "CTDD_positive_0"), 1.0 / 8.0));
        assert!(f64_approx_equal(value(&block, "CTDD_positive_25"), 1.0 / 8.0));
        assert!(f64_approx_equal(value(&block, "CTDD_positive_50"), 1.0 / 8.0));
        assert!(f64_approx_equal(value(&block, "CTDD_positive_75"), 4.0 / 8.0));
        assert!(f64_approx_equal(value(&block, "CTDD_positive_100"), 8.0 / 8.0));
        for p in DISTRIBUTION_PERCENTILES {
            let key = format!("CTDD_negative_{}", p);
            assert!(f64_approx_equal(value(&block, &key), 0.0));
        }
    }

    #[test]
    fn ungroupable_symbols_are_skipped() {
        assert_eq!(ctd("KXXA"), ctd("KA"));
    }

    #[test]
    fn empty_sequence_yields_no_keys() {
        assert!(ctd("").is_empty());
    }

    #[test]
    fn sequence_without_groupable_residues_yields_zeros() {
        let block = ctd("XXBZ");
        assert_eq!(block.len(), 21);
        assert!(block.iter().all(|(_, v)| v.as_f64() == Some(0.0)));
    }
}
