use crate::core::models::features::FeatureRow;
use crate::core::tables::pka::{
    Ionization, TITRATION_C_TERMINAL_PK, TITRATION_N_TERMINAL_PK, TITRATION_PKA, partial_charge,
};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PiError {
    #[error("Cannot estimate the isoelectric point of an empty sequence")]
    EmptySequence,

    #[error("Invalid residue '{residue}' at position {position}")]
    InvalidResidue { residue: char, position: usize },

    #[error("Isoelectric point search did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Anything that can estimate the pH at which a sequence carries no net charge.
pub trait IsoelectricPointEstimator: Send + Sync {
    fn estimate(&self, sequence: &str) -> Result<f64, PiError>;
}

/// Bisection over the charge curve of a titration model.
///
/// Terminal pK values depend on the terminal residues, and only the 20 standard residues are
/// titrated; other letters are accepted and ignored.
#[derive(Debug, Clone, Copy)]
pub struct TitrationEstimator {
    start_ph: f64,
    lower: f64,
    upper: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for TitrationEstimator {
    fn default() -> Self {
        Self::new()
    }
}

const PH_FLOOR: f64 = 0.0;
const PH_CEILING: f64 = 14.0;
const WIDENING_STEP: f64 = 2.0;

#[derive(Debug)]
struct ResidueCounts {
    side_chains: [(char, usize); 7],
    n_terminal_pk: f64,
    c_terminal_pk: f64,
}

impl ResidueCounts {
    fn from_sequence(sequence: &str) -> Result<Self, PiError> {
        let mut side_chains = ['H', 'K', 'R', 'D', 'E', 'C', 'Y'].map(|aa| (aa, 0usize));
        let mut first = None;
        let mut last = None;

        for (position, c) in sequence.chars().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(PiError::InvalidResidue {
                    residue: c,
                    position: position + 1,
                });
            }
            let residue = c.to_ascii_uppercase();
            if first.is_none() {
                first = Some(residue);
            }
            last = Some(residue);
            if let Some(slot) = side_chains.iter_mut().find(|(aa, _)| *aa == residue) {
                slot.1 += 1;
            }
        }

        let (Some(first), Some(last)) = (first, last) else {
            return Err(PiError::EmptySequence);
        };

        Ok(Self {
            side_chains,
            n_terminal_pk: TITRATION_N_TERMINAL_PK
                .get(&first)
                .copied()
                .unwrap_or(TITRATION_PKA.n_terminus),
            c_terminal_pk: TITRATION_C_TERMINAL_PK
                .get(&last)
                .copied()
                .unwrap_or(TITRATION_PKA.c_terminus),
        })
    }

    fn charge_at(&self, ph: f64) -> f64 {
        let termini = partial_charge(Ionization::Basic, self.n_terminal_pk, ph)
            + partial_charge(Ionization::Acidic, self.c_terminal_pk, ph);
        self.side_chains
            .iter()
            .filter(|(_, count)| *count > 0)
            .filter_map(|(aa, count)| {
                TITRATION_PKA
                    .side_chains
                    .get(aa)
                    .map(|&(ionization, pk)| *count as f64 * partial_charge(ionization, pk, ph))
            })
            .fold(termini, |acc, c| acc + c)
    }
}

impl TitrationEstimator {
    pub const fn new() -> Self {
        Self {
            start_ph: 7.775,
            lower: 4.05,
            upper: 12.0,
            tolerance: 1e-4,
            max_iterations: 200,
        }
    }

    /// Net charge of `sequence` at `ph` under this estimator's titration model.
    pub fn charge_at(&self, sequence: &str, ph: f64) -> Result<f64, PiError> {
        Ok(ResidueCounts::from_sequence(sequence)?.charge_at(ph))
    }

    fn checked_charge(&self, counts: &ResidueCounts, ph: f64) -> Result<f64, PiError> {
        let charge = counts.charge_at(ph);
        if charge.is_finite() {
            Ok(charge)
        } else {
            Err(PiError::NoConvergence { iterations: 0 })
        }
    }
}

impl IsoelectricPointEstimator for TitrationEstimator {
    fn estimate(&self, sequence: &str) -> Result<f64, PiError> {
        let counts = ResidueCounts::from_sequence(sequence)?;

        let mut lower = self.lower;
        while lower > PH_FLOOR && self.checked_charge(&counts, lower)? < 0.0 {
            lower = (lower - WIDENING_STEP).max(PH_FLOOR);
        }
        let mut upper = self.upper;
        while upper < PH_CEILING && self.checked_charge(&counts, upper)? > 0.0 {
            upper = (upper + WIDENING_STEP).min(PH_CEILING);
        }

        let mut ph = self.start_ph.clamp(lower, upper);
        let mut iterations = 0;
        while upper - lower > self.tolerance {
            if iterations >= self.max_iterations {
                return Err(PiError::NoConvergence { iterations });
            }
            let charge = counts.charge_at(ph);
            if !charge.is_finite() {
                return Err(PiError::NoConvergence { iterations });
            }
            if charge > 0.0 {
                lower = ph;
            } else {
                upper = ph;
            }
            ph = (lower + upper) / 2.0;
            iterations += 1;
        }
        Ok(ph)
    }
}

/// Runs `estimator` on `sequence`, turning every failure into `None` with a warning.
pub fn compute_pi(estimator: &dyn IsoelectricPointEstimator, sequence: &str) -> Option<f64> {
    if sequence.is_empty() {
        warn!("Skipping isoelectric point for an empty sequence");
        return None;
    }
    match estimator.estimate(sequence) {
        Ok(pi) if pi.is_finite() => Some(pi),
        Ok(pi) => {
            warn!(value = pi, "Isoelectric point estimate is not finite");
            None
        }
        Err(e) => {
            warn!(error = %e, "Isoelectric point estimation failed");
            None
        }
    }
}

/// `pI` block; a failed estimate is stored as a missing value.
pub fn isoelectric_point(estimator: &dyn IsoelectricPointEstimator, sequence: &str) -> FeatureRow {
    let mut block = FeatureRow::with_capacity(1);
    block.set("pI", compute_pi(estimator, sequence));
    block
}
