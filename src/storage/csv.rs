//! CSV export
//!
//! Fields are joined with commas verbatim. Embedded commas are not quoted,
//! so names containing a comma produce an ambiguous row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::Employee;
use crate::StaffError;

/// Header row written before any record
pub const CSV_HEADER: &str = "id,name,department,attendance_date,attendance_days";

/// Write `records` to `path` as UTF-8 CSV, returning the number of rows
pub fn export_csv<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let write_failed = |e: std::io::Error| {
        StaffError::FileWrite(format!("{}: {}", path.display(), e))
    };

    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER).map_err(write_failed)?;

    let mut rows = 0;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            record.id,
            record.name.to_str_lossy(),
            record.department.to_str_lossy(),
            record.attendance_date.to_str_lossy(),
            record.attendance_days
        )
        .map_err(write_failed)?;
        rows += 1;
    }

    writer.flush().map_err(write_failed)?;

    info!(path = %path.display(), rows, "Exported CSV");
    Ok(rows)
}
