//! # Sequence Descriptors
//!
//! Stateless transformations from an amino-acid sequence to a block of named features.
//!
//! Each submodule owns one descriptor family and produces a [`FeatureRow`] whose keys are fixed
//! for a given configuration:
//!
//! - [`aac`] - amino-acid composition (`AAC_<residue>`)
//! - [`charge`] - Henderson-Hasselbalch net charge (`Charge`)
//! - [`hydrophobicity`] - Kyte-Doolittle statistics (`Hydro_mean`, `Hydro_max`, `Hydro_min`)
//! - [`physicochemical`] - averaged residue scales (`Polarity`, `Flexibility`, propensities)
//! - [`isoelectric`] - isoelectric point estimation (`pI`)
//! - [`ctd`] - charge-class composition, transition and distribution (`CTDC_*`, `CTDT_*`, `CTDD_*`)
//! - [`motif`] - motif presence flags (`Motif_<pattern>`)
//!
//! Unknown residues score zero in every lookup-table descriptor. Descriptors that cannot define a
//! value for an empty sequence return [`DescriptorError::EmptySequence`].
//!
//! [`FeatureRow`]: crate::core::models::features::FeatureRow

pub mod aac;
pub mod charge;
pub mod ctd;
pub mod error;
pub mod hydrophobicity;
pub mod isoelectric;
pub mod motif;
pub mod physicochemical;

pub use error::DescriptorError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The hand-crafted descriptor families, in row assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptorKind {
    Aac,
    Charge,
    Hydrophobicity,
    Physicochemical,
    IsoelectricPoint,
    Ctd,
    Motif,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 7] = [
        DescriptorKind::Aac,
        DescriptorKind::Charge,
        DescriptorKind::Hydrophobicity,
        DescriptorKind::Physicochemical,
        DescriptorKind::IsoelectricPoint,
        DescriptorKind::Ctd,
        DescriptorKind::Motif,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DescriptorKind::Aac => "aac",
            DescriptorKind::Charge => "charge",
            DescriptorKind::Hydrophobicity => "hydrophobicity",
            DescriptorKind::Physicochemical => "physicochemical",
            DescriptorKind::IsoelectricPoint => "isoelectric-point",
            DescriptorKind::Ctd => "ctd",
            DescriptorKind::Motif => "motif",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DescriptorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DescriptorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .or(match normalized.as_str() {
                "pi" => Some(DescriptorKind::IsoelectricPoint),
                "hydro" => Some(DescriptorKind::Hydrophobicity),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown descriptor '{}'", s))
    }
}
