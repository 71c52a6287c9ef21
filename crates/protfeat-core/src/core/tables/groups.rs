use phf::{Map, phf_map};
use std::fmt;

/// Charge-class partition of the standard residues used by the CTD descriptors.
///
/// The declaration order (positive, negative, neutral) fixes both the key order of the CTD block
/// and the canonical orientation of transition pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChargeGroup {
    Positive,
    Negative,
    Neutral,
}

#[rustfmt::skip]
static CHARGE_GROUPS: Map<char, ChargeGroup> = phf_map! {
    'K' => ChargeGroup::Positive, 'R' => ChargeGroup::Positive, 'H' => ChargeGroup::Positive,
    'D' => ChargeGroup::Negative, 'E' => ChargeGroup::Negative,
    'A' => ChargeGroup::Neutral, 'C' => ChargeGroup::Neutral, 'F' => ChargeGroup::Neutral,
    'G' => ChargeGroup::Neutral, 'I' => ChargeGroup::Neutral, 'L' => ChargeGroup::Neutral,
    'M' => ChargeGroup::Neutral, 'N' => ChargeGroup::Neutral, 'P' => ChargeGroup::Neutral,
    'Q' => ChargeGroup::Neutral, 'S' => ChargeGroup::Neutral, 'T' => ChargeGroup::Neutral,
    'V' => ChargeGroup::Neutral, 'W' => ChargeGroup::Neutral, 'Y' => ChargeGroup::Neutral,
};

impl ChargeGroup {
    pub const ALL: [ChargeGroup; 3] = [
        ChargeGroup::Positive,
        ChargeGroup::Negative,
        ChargeGroup::Neutral,
    ];

    /// Returns the group of an upper-case residue code, or `None` for symbols outside the
    /// partition (X, B, U, lower case, gaps).
    pub fn of(residue: char) -> Option<Self> {
        CHARGE_GROUPS.get(&residue).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChargeGroup::Positive => "positive",
            ChargeGroup::Negative => "negative",
            ChargeGroup::Neutral => "neutral",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Orders a pair of distinct groups by partition order.
    pub fn canonical_pair(a: Self, b: Self) -> (Self, Self) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl fmt::Display for ChargeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
