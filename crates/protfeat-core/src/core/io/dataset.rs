use super::traits::TabularFile;
use crate::core::models::record::ProteinRecord;
use std::collections::HashSet;
use std::io::{self, Read, Write};
use thiserror::Error;

pub const PROTEIN_ID_COLUMN: &str = "Protein_ID";
pub const SEQUENCE_COLUMN: &str = "Sequence";
pub const LABEL_COLUMN: &str = "Label";

const REQUIRED_COLUMNS: [&str; 3] = [PROTEIN_ID_COLUMN, SEQUENCE_COLUMN, LABEL_COLUMN];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Row {row} has an empty protein id")]
    EmptyProteinId { row: usize },

    #[error("Row {row} ('{protein_id}') has an empty sequence")]
    EmptySequence { row: usize, protein_id: String },

    #[error("Duplicate protein id '{protein_id}' at row {row}")]
    DuplicateId { row: usize, protein_id: String },

    #[error("Duplicate column '{0}' in header")]
    DuplicateColumn(String),
}

/// The labelled input dataset: a CSV with `Protein_ID`, `Sequence` and `Label` columns.
///
/// Extra columns are ignored and fields are trimmed. Rows are numbered from 1, excluding the
/// header.
pub struct DatasetFile;

impl TabularFile for DatasetFile {
    type Content = Vec<ProteinRecord>;
    type Error = DatasetError;

    fn read_from(reader: &mut impl Read) -> Result<Self::Content, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        let mut seen_ids = HashSet::new();
        for (i, result) in csv_reader.deserialize::<ProteinRecord>().enumerate() {
            let row = i + 1;
            let record = result?;
            if record.protein_id.is_empty() {
                return Err(DatasetError::EmptyProteinId { row });
            }
            if record.sequence.is_empty() {
                return Err(DatasetError::EmptySequence {
                    row,
                    protein_id: record.protein_id,
                });
            }
            if !seen_ids.insert(record.protein_id.clone()) {
                return Err(DatasetError::DuplicateId {
                    row,
                    protein_id: record.protein_id,
                });
            }
            records.push(record);
        }
        Ok(records)
    }

    fn write_to(content: &Self::Content, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in content {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn read(text: &str) -> Result<Vec<ProteinRecord>, DatasetError> {
        DatasetFile::read_from(&mut text.as_bytes())
    }

    #[test]
    fn reads_records_ignoring_extra_columns_and_whitespace() {
        let records = read(
            "Protein_ID,Organism,Sequence,Label\n\
             P1, human , MKRAG ,1\n\
             P2,yeast,DEEK,0\n",
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                ProteinRecord::new("P1", "MKRAG", "1"),
                ProteinRecord::new("P2", "DEEK", "0"),
            ]
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = read("Protein_ID,Sequence\nP1,MK\n").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Label")));
    }

    #[test]
    fn empty_sequence_names_row_and_id() {
        let err = read("Protein_ID,Sequence,Label\nP1,MK,1\nP2,  ,0\n").unwrap_err();
        match err {
            DatasetError::EmptySequence { row, protein_id } => {
                assert_eq!(row, 2);
                assert_eq!(protein_id, "P2");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = read("Protein_ID,Sequence,Label\nP1,MK,1\nP1,KR,0\n").unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { row: 2, .. }));
    }

    #[test]
    fn header_only_file_yields_no_records() {
        assert!(read("Protein_ID,Sequence,Label\n").unwrap().is_empty());
    }

    #[test]
    fn write_then_read_from_path_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let records = vec![
            ProteinRecord::new("A0A1", "MKRAGKKLMRRQK", "MBP"),
            ProteinRecord::new("B2C3", "GSHMDE", "non-MBP"),
        ];
        DatasetFile::write_to_path(&records, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Protein_ID,Sequence,Label\n"));
        assert_eq!(DatasetFile::read_from_path(&path).unwrap(), records);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = DatasetFile::read_from_path(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
