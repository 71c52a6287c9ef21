use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// A single cell of a feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Float(f64),
    Int(i64),
    Text(String),
    /// Null sentinel for features that could not be computed (e.g. a failed pI estimate).
    Missing,
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Text(_) | FeatureValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FeatureValue::Missing)
    }

    /// Parses a serialized cell, inferring the narrowest type.
    ///
    /// Empty cells become [`FeatureValue::Missing`], integers become [`FeatureValue::Int`],
    /// other numbers [`FeatureValue::Float`] and everything else [`FeatureValue::Text`].
    pub fn parse_cell(cell: &str) -> Self {
        if cell.is_empty() {
            FeatureValue::Missing
        } else if let Ok(v) = cell.parse::<i64>() {
            FeatureValue::Int(v)
        } else if let Ok(v) = cell.parse::<f64>() {
            FeatureValue::Float(v)
        } else {
            FeatureValue::Text(cell.to_string())
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the decimal point so floats never read back as integers.
            FeatureValue::Float(v) => write!(f, "{:?}", v),
            FeatureValue::Int(v) => write!(f, "{}", v),
            FeatureValue::Text(s) => f.write_str(s),
            FeatureValue::Missing => Ok(()),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<f32> for FeatureValue {
    fn from(v: f32) -> Self {
        FeatureValue::Float(f64::from(v))
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Int(i64::from(v))
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Text(v)
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Text(v.to_string())
    }
}

impl From<Option<f64>> for FeatureValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(FeatureValue::Missing, FeatureValue::Float)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Duplicate feature key: '{0}'")]
pub struct DuplicateFeature(pub String);

/// An insertion-ordered mapping from feature name to value.
///
/// Descriptor modules return one of these as their feature block, and the row assembler merges
/// the blocks into a single row. Keys are unique: [`FeatureRow::insert`] and
/// [`FeatureRow::merge`] refuse to overwrite an existing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    entries: Vec<(String, FeatureValue)>,
    index: HashMap<String, usize>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FeatureValue>,
    ) -> Result<(), DuplicateFeature> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(DuplicateFeature(key));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value.into()));
        Ok(())
    }

    /// Inserts or overwrites a value. Descriptors use this for their own, statically unique keys.
    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Appends every entry of `other`, failing on the first key that is already present.
    ///
    /// On failure `self` is left unchanged.
    pub fn merge(&mut self, other: FeatureRow) -> Result<(), DuplicateFeature> {
        if let Some((key, _)) = other
            .entries
            .iter()
            .find(|(key, _)| self.index.contains_key(key))
        {
            return Err(DuplicateFeature(key.clone()));
        }
        self.entries.reserve(other.entries.len());
        for (key, value) in other.entries {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for FeatureRow {
    type Item = (String, FeatureValue);
    type IntoIter = std::vec::IntoIter<(String, FeatureValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Ordered collection of feature rows with a first-seen column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    known_columns: HashSet<String>,
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with a declared column order; later rows may still add columns.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for column in columns {
            let column = column.into();
            if table.known_columns.insert(column.clone()) {
                table.columns.push(column);
            }
        }
        table
    }

    pub fn push(&mut self, row: FeatureRow) {
        for key in row.keys() {
            if !self.known_columns.contains(key) {
                self.known_columns.insert(key.to_string());
                self.columns.push(key.to_string());
            }
        }
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` when every row carries exactly the table's column set.
    pub fn has_uniform_schema(&self) -> bool {
        self.rows.iter().all(|row| {
            row.len() == self.columns.len() && self.columns.iter().all(|c| row.contains_key(c))
        })
    }
}

impl FromIterator<FeatureRow> for FeatureTable {
    fn from_iter<I: IntoIterator<Item = FeatureRow>>(iter: I) -> Self {
        let mut table = FeatureTable::new();
        for row in iter {
            table.push(row);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order_and_rejects_duplicates() {
        let mut row = FeatureRow::new();
        row.insert("b", 1.0).unwrap();
        row.insert("a", 2i64).unwrap();
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(row.insert("b", 3.0), Err(DuplicateFeature("b".to_string())));
        assert_eq!(row.get("b"), Some(&FeatureValue::Float(1.0)));
    }

    #[test]
    fn merge_leaves_row_unchanged_on_collision() {
        let mut row = FeatureRow::new();
        row.insert("Charge", 1.0).unwrap();

        let mut other = FeatureRow::new();
        other.insert("pI", 7.0).unwrap();
        other.insert("Charge", 2.0).unwrap();

        let err = row.merge(other).unwrap_err();
        assert_eq!(err.0, "Charge");
        assert_eq!(row.len(), 1);
        assert!(!row.contains_key("pI"));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut row = FeatureRow::new();
        row.set("x", 1.0);
        row.set("y", 2.0);
        row.set("x", 5.0);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(row.get("x"), Some(&FeatureValue::Float(5.0)));
    }

    #[test]
    fn table_columns_follow_first_seen_order() {
        let mut first = FeatureRow::new();
        first.insert("a", 1.0).unwrap();
        first.insert("b", 1.0).unwrap();
        let mut second = FeatureRow::new();
        second.insert("c", 1.0).unwrap();
        second.insert("a", 1.0).unwrap();

        let table: FeatureTable = vec![first, second].into_iter().collect();
        assert_eq!(table.columns(), &["a", "b", "c"]);
        assert!(!table.has_uniform_schema());
    }

    #[test]
    fn display_and_parse_cell_agree_on_types() {
        for value in [
            FeatureValue::Float(1.0),
            FeatureValue::Float(0.125),
            FeatureValue::Float(1e-7),
            FeatureValue::Int(0),
            FeatureValue::Text("membrane".to_string()),
            FeatureValue::Missing,
        ] {
            assert_eq!(FeatureValue::parse_cell(&value.to_string()), value);
        }
    }

    #[test]
    fn optional_float_converts_to_missing() {
        assert_eq!(FeatureValue::from(None::<f64>), FeatureValue::Missing);
        assert_eq!(FeatureValue::from(Some(6.5)), FeatureValue::Float(6.5));
        assert_eq!(FeatureValue::from(true), FeatureValue::Int(1));
    }
}
