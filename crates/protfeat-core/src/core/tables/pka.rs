use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ionization {
    /// Protonated form carries `+1` (N-terminus, H, K, R).
    Basic,
    /// Deprotonated form carries `-1` (C-terminus, D, E, C, Y).
    Acidic,
}

/// A set of pKa values for the termini and the ionisable side chains.
#[derive(Debug, Clone, Copy)]
pub struct PkaTable {
    pub n_terminus: f64,
    pub c_terminus: f64,
    pub side_chains: &'static Map<char, (Ionization, f64)>,
}

#[rustfmt::skip]
static NET_CHARGE_SIDE_CHAINS: Map<char, (Ionization, f64)> = phf_map! {
    'H' => (Ionization::Basic, 6.00),
    'K' => (Ionization::Basic, 10.53),
    'R' => (Ionization::Basic, 12.48),
    'D' => (Ionization::Acidic, 3.65),
    'E' => (Ionization::Acidic, 4.25),
    'C' => (Ionization::Acidic, 8.18),
    'Y' => (Ionization::Acidic, 10.07),
};

/// pKa values used by the `Charge` descriptor.
pub static NET_CHARGE_PKA: PkaTable = PkaTable {
    n_terminus: 9.69,
    c_terminus: 2.34,
    side_chains: &NET_CHARGE_SIDE_CHAINS,
};

#[rustfmt::skip]
static TITRATION_SIDE_CHAINS: Map<char, (Ionization, f64)> = phf_map! {
    'H' => (Ionization::Basic, 5.98),
    'K' => (Ionization::Basic, 10.0),
    'R' => (Ionization::Basic, 12.0),
    'D' => (Ionization::Acidic, 4.05),
    'E' => (Ionization::Acidic, 4.45),
    'C' => (Ionization::Acidic, 9.0),
    'Y' => (Ionization::Acidic, 10.0),
};

/// pK values used by the titration isoelectric point estimator.
pub static TITRATION_PKA: PkaTable = PkaTable {
    n_terminus: 9.0,
    c_terminus: 2.0,
    side_chains: &TITRATION_SIDE_CHAINS,
};

/// N-terminal pK overrides keyed by the first residue.
#[rustfmt::skip]
pub static TITRATION_N_TERMINAL_PK: Map<char, f64> = phf_map! {
    'A' => 7.59, 'M' => 7.0, 'S' => 6.93, 'P' => 8.36,
    'T' => 6.82, 'V' => 7.44, 'E' => 7.7,
};

/// C-terminal pK overrides keyed by the last residue.
#[rustfmt::skip]
pub static TITRATION_C_TERMINAL_PK: Map<char, f64> = phf_map! {
    'D' => 4.55, 'E' => 4.75,
};

/// Fractional charge of one group at `ph` (Henderson-Hasselbalch).
#[inline]
pub fn partial_charge(ionization: Ionization, pka: f64, ph: f64) -> f64 {
    match ionization {
        Ionization::Basic => 1.0 / (1.0 + 10f64.powf(ph - pka)),
        Ionization::Acidic => -1.0 / (1.0 + 10f64.powf(pka - ph)),
    }
}
