use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::Result;
use crate::records::EnrichedRecord;

pub struct ResultWriter;

impl ResultWriter {
    /// Write enriched records to a headered CSV file.
    pub fn to_file(records: &[EnrichedRecord], path: &Path) -> Result<()> {
        tracing::debug!("Writing enriched roster to: {}", path.display());

        let file = File::create(path)?;
        Self::to_writer(records, BufWriter::new(file))?;

        tracing::info!(
            "Wrote {} enriched record(s) to {}",
            records.len(),
            path.display()
        );

        Ok(())
    }

    pub fn to_writer<W: Write>(records: &[EnrichedRecord], writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for record in records {
            csv_writer.serialize(record)?;
        }

        csv_writer.flush().map_err(crate::Error::Io)?;
        Ok(())
    }

    /// Default output path: `enriched_YYYYMMDD_HHMMSS.csv` under `dir`.
    pub fn timestamped_path(dir: &Path) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        dir.join(format!("enriched_{}.csv", stamp))
    }
}
