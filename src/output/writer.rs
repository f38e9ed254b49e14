//! CSV table writer

use crate::error::{Result, ResultExt};
use crate::table::Table;
use crate::types::JsonValue;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Byte order mark written before the header
pub const UTF8_BOM: &str = "\u{feff}";

/// Write a table as CSV: a header of the columns, then one line per row
///
/// Null cells are left empty, strings are written as-is and any other value
/// is written as compact JSON.
pub fn write_csv<W: Write>(table: &Table, mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM.as_bytes())?;
    if table.columns().is_empty() {
        writer.flush()?;
        return Ok(());
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.columns())?;
    for row in table.rows() {
        csv.write_record(table.columns().iter().map(|c| cell(row.get(c))))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write a table to a CSV file, replacing any existing file
pub fn write_csv_file(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(table, BufWriter::new(file))
}

fn cell(value: Option<&JsonValue>) -> Cow<'_, [u8]> {
    match value {
        None | Some(JsonValue::Null) => Cow::Borrowed(b""),
        Some(JsonValue::String(s)) => Cow::Borrowed(s.as_bytes()),
        Some(other) => Cow::Owned(other.to_string().into_bytes()),
    }
}
