use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing tabular files.
///
/// Implementors handle format-specific parsing and serialization of one kind of content; the
/// path-based helpers wrap the stream methods in buffered file handles.
pub trait TabularFile {
    /// The in-memory representation of the file.
    type Content;

    /// The error type for I/O and parsing failures.
    type Error: Error + From<io::Error>;

    fn read_from(reader: &mut impl Read) -> Result<Self::Content, Self::Error>;

    fn write_to(content: &Self::Content, writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Content, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(content: &Self::Content, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(content, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
