use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::Result;
use crate::records::PersonRecord;

pub struct RosterReader;

impl RosterReader {
    /// Read a headered CSV roster from the given path.
    pub fn from_file(path: &Path) -> Result<Vec<PersonRecord>> {
        tracing::debug!("Reading roster file from: {}", path.display());

        let file = File::open(path)?;
        let records = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            "Loaded {} records from {}",
            records.len(),
            path.display()
        );

        Ok(records)
    }

    /// Parse roster rows from any reader. Rows that fail to
    /// deserialize are skipped with a warning rather than aborting the
    /// whole roster.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PersonRecord>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (row, result) in csv_reader.deserialize::<PersonRecord>().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping unparseable roster row {}: {}", row + 1, e);
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} unparseable roster row(s)", skipped);
        }

        Ok(records)
    }
}
