use super::dataset::DatasetError;
use super::traits::TabularFile;
use crate::core::models::features::{FeatureRow, FeatureTable, FeatureValue};
use std::io::{Read, Write};

/// The output feature matrix as CSV.
///
/// The header is the table's column order; a missing value or an absent column is written as an
/// empty cell. Reading infers cell types with [`FeatureValue::parse_cell`], so text cells that
/// look numeric (such as a label `1`) come back as numbers.
pub struct FeatureTableFile;

impl TabularFile for FeatureTableFile {
    type Content = FeatureTable;
    type Error = DatasetError;

    fn read_from(reader: &mut impl Read) -> Result<Self::Content, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut table = FeatureTable::with_columns(headers.iter());
        if table.columns().len() != headers.len() {
            let duplicate = headers
                .iter()
                .enumerate()
                .find(|(i, h)| headers.iter().take(*i).any(|prev| prev == *h))
                .map(|(_, h)| h.to_string())
                .unwrap_or_default();
            return Err(DatasetError::DuplicateColumn(duplicate));
        }

        for result in csv_reader.records() {
            let record = result?;
            let mut row = FeatureRow::with_capacity(headers.len());
            for (column, cell) in headers.iter().zip(record.iter()) {
                row.set(column, FeatureValue::parse_cell(cell));
            }
            table.push(row);
        }
        Ok(table)
    }

    fn write_to(content: &Self::Content, writer: &mut impl Write) -> Result<(), Self::Error> {
        if content.columns().is_empty() {
            return Ok(());
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(content.columns())?;
        for row in content.rows() {
            csv_writer.write_record(content.columns().iter().map(|column| {
                row.get(column)
                    .map(FeatureValue::to_string)
                    .unwrap_or_default()
            }))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_table() -> FeatureTable {
        let mut first = FeatureRow::new();
        first.insert("AAC_A", 0.25).unwrap();
        first.insert("pI", 9.5).unwrap();
        first.insert("Motif_KR", 1i64).unwrap();
        first.insert("Label", "MBP").unwrap();
        first.insert("Protein_ID", "P1").unwrap();

        let mut second = FeatureRow::new();
        second.insert("AAC_A", 0.0).unwrap();
        second.insert("pI", FeatureValue::Missing).unwrap();
        second.insert("Motif_KR", 0i64).unwrap();
        second.insert("Label", "other").unwrap();
        second.insert("Protein_ID", "P2").unwrap();

        vec![first, second].into_iter().collect()
    }

    #[test]
    fn missing_values_are_written_as_empty_cells() {
        let mut buffer = Vec::new();
        FeatureTableFile::write_to(&sample_table(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "AAC_A,pI,Motif_KR,Label,Protein_ID\n\
             0.25,9.5,1,MBP,P1\n\
             0.0,,0,other,P2\n"
        );
    }

    #[test]
    fn absent_columns_are_written_as_empty_cells() {
        let mut first = FeatureRow::new();
        first.insert("a", 1.5).unwrap();
        let mut second = FeatureRow::new();
        second.insert("b", 2.5).unwrap();
        let table: FeatureTable = vec![first, second].into_iter().collect();

        let mut buffer = Vec::new();
        FeatureTableFile::write_to(&table, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a,b\n1.5,\n,2.5\n");
    }

    #[test]
    fn table_survives_a_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("features.csv");
        let table = sample_table();
        FeatureTableFile::write_to_path(&table, &path).unwrap();
        assert_eq!(FeatureTableFile::read_from_path(&path).unwrap(), table);
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let err = FeatureTableFile::read_from(&mut "a,b,a\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateColumn(c) if c == "a"));
    }
}
