use crate::core::models::features::FeatureRow;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Motifs associated with membrane binding (clusters of basic residues).
pub const DEFAULT_MOTIFS: [&str; 6] = ["KR", "RR", "KK", "KXK", "K[RK]K", "R..R"];

#[derive(Debug, Error)]
pub enum MotifError {
    #[error("Invalid motif pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate motif pattern '{0}'")]
    DuplicatePattern(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotifKind {
    /// Plain residue string, e.g. `KR`.
    Literal,
    /// Residue string where `X` stands for any residue, e.g. `KXK`.
    Wildcard,
    /// Anything else, interpreted as a regular expression.
    Regex,
}

impl MotifKind {
    pub fn classify(pattern: &str) -> Self {
        if !pattern.chars().all(|c| c.is_ascii_uppercase()) {
            MotifKind::Regex
        } else if pattern.contains('X') {
            MotifKind::Wildcard
        } else {
            MotifKind::Literal
        }
    }
}

impl fmt::Display for MotifKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MotifKind::Literal => "literal",
            MotifKind::Wildcard => "wildcard",
            MotifKind::Regex => "regex",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct Motif {
    pattern: String,
    kind: MotifKind,
    regex: Regex,
}

impl Motif {
    pub fn compile(pattern: &str) -> Result<Self, MotifError> {
        let regex =
            Regex::new(&pattern.replace('X', ".")).map_err(|source| MotifError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            kind: MotifKind::classify(pattern),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> MotifKind {
        self.kind
    }

    pub fn key(&self) -> String {
        format!("Motif_{}", self.pattern)
    }

    pub fn is_present(&self, sequence: &str) -> bool {
        self.regex.is_match(sequence)
    }
}

/// An ordered, pre-compiled list of motif patterns.
#[derive(Debug, Clone)]
pub struct MotifSet {
    motifs: Vec<Motif>,
}

impl MotifSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, MotifError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut motifs = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if !seen.insert(pattern.to_string()) {
                return Err(MotifError::DuplicatePattern(pattern.to_string()));
            }
            motifs.push(Motif::compile(pattern)?);
        }
        Ok(Self { motifs })
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.motifs.iter().map(Motif::pattern)
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    /// Presence flags (`1`/`0`) keyed `Motif_<pattern>`, in set order.
    pub fn scan(&self, sequence: &str) -> FeatureRow {
        let mut block = FeatureRow::with_capacity(self.motifs.len());
        for motif in &self.motifs {
            block.set(motif.key(), motif.is_present(sequence));
        }
        block
    }
}

impl Default for MotifSet {
    fn default() -> Self {
        let motifs = DEFAULT_MOTIFS
            .iter()
            .filter_map(|p| Motif::compile(p).ok())
            .collect();
        Self { motifs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::features::FeatureValue;

    #[test]
    fn default_motifs_match_reference_sequence() {
        let block = MotifSet::default().scan("MKRAGKKLMRRQK");
        let expected = [
            ("Motif_KR", 1),
            ("Motif_RR", 1),
            ("Motif_KK", 1),
            ("Motif_KXK", 0),
            ("Motif_K[RK]K", 0),
            ("Motif_R..R", 0),
        ];
        assert_eq!(block.len(), expected.len());
        for ((key, value), (expected_key, expected_value)) in block.iter().zip(expected) {
            assert_eq!(key, expected_key);
            assert_eq!(value, &FeatureValue::Int(expected_value));
        }
    }

    #[test]
    fn default_set_compiles_every_builtin() {
        let set = MotifSet::default();
        assert_eq!(set.patterns().collect::<Vec<_>>(), DEFAULT_MOTIFS.to_vec());
    }

    #[test]
    fn wildcard_matches_any_residue() {
        let set = MotifSet::new(["KXK"]).unwrap();
        assert_eq!(set.scan("AKWKA").get("Motif_KXK"), Some(&FeatureValue::Int(1)));
        assert_eq!(set.scan("AKKA").get("Motif_KXK"), Some(&FeatureValue::Int(0)));
    }

    #[test]
    fn patterns_are_classified_by_kind() {
        assert_eq!(MotifKind::classify("KR"), MotifKind::Literal);
        assert_eq!(MotifKind::classify("KXK"), MotifKind::Wildcard);
        assert_eq!(MotifKind::classify("K[RK]K"), MotifKind::Regex);
        assert_eq!(MotifKind::classify("R..R"), MotifKind::Regex);
    }

    #[test]
    fn invalid_pattern_names_the_offender() {
        let err = MotifSet::new(["KR", "K[RK"]).unwrap_err();
        match &err {
            MotifError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "K[RK"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("K[RK"));
    }

    #[test]
    fn duplicate_patterns_are_rejected() {
        assert!(matches!(
            MotifSet::new(["KR", "KR"]),
            Err(MotifError::DuplicatePattern(p)) if p == "KR"
        ));
    }

    #[test]
    fn empty_pattern_list_produces_no_keys() {
        let set = MotifSet::new(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(set.scan("KRKR").is_empty());
    }
}
