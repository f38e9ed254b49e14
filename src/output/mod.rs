//! Output module
//!
//! Writes candidate tables to CSV for offline use. Files start with a UTF-8
//! BOM so spreadsheet tools pick the right encoding for Vietnamese names.

mod writer;

pub use writer::{write_csv, write_csv_file, UTF8_BOM};
