/// CSV output and stdout preview.
///
/// Rows go out in insertion order behind a fixed header. Fields containing
/// delimiters or quotes get standard CSV quoting via the `csv` writer. There
/// is no partial-file cleanup: a failed write leaves whatever made it to disk.
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::Record;

/// Write the header row plus one row per record to `path`.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open output file: {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush output file: {}", path.display()))?;
    Ok(())
}

/// Print up to `limit` records to `out` as tab-separated lines.
pub fn write_preview(out: &mut impl Write, records: &[Record], limit: usize) -> io::Result<()> {
    for record in records.iter().take(limit) {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.id,
            record.last_name,
            record.first_name,
            record.age,
            record.gender,
            record.address,
            record.email,
            record.extras,
        )?;
    }
    Ok(())
}
