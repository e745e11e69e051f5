use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::extract::StandingsRecord;

/// Output column order. Downstream importers key on these names.
pub const COLUMNS: [&str; 9] = [
    "Year", "Division", "Team", "Wins", "Losses", "Ties", "WP", "GB", "Payroll",
];

/// Write `records` as CSV, replacing whatever is at `path`.
pub fn write_records<P: AsRef<Path>>(records: &[StandingsRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScrapeError::write(path, e))?;
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ScrapeError::write(path, e))?;
    writer
        .write_record(COLUMNS)
        .map_err(|e| ScrapeError::write(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ScrapeError::write(path, e))?;
    }
    writer.flush().map_err(|e| ScrapeError::write(path, e))
}

/// Read a dataset written by [`write_records`].
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<StandingsRecord>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| ScrapeError::read(path, e))?;

    let headers = reader.headers().map_err(|e| ScrapeError::read(path, e))?;
    if headers.iter().ne(COLUMNS.iter().copied()) {
        return Err(ScrapeError::read(
            path,
            anyhow::anyhow!("unexpected columns: {:?}", headers),
        ));
    }

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<StandingsRecord>, _>>()
        .map_err(|e| ScrapeError::read(path, e))
}
