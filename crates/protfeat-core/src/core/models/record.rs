use serde::{Deserialize, Serialize};

/// One row of the input dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    #[serde(rename = "Protein_ID")]
    pub protein_id: String,
    #[serde(rename = "Sequence")]
    pub sequence: String,
    /// Class label, passed through to the output unchanged.
    #[serde(rename = "Label")]
    pub label: String,
}

impl ProteinRecord {
    pub fn new(
        protein_id: impl Into<String>,
        sequence: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            protein_id: protein_id.into(),
            sequence: sequence.into(),
            label: label.into(),
        }
    }
}
