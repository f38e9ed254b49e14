//! In-memory tables of dynamic records
//!
//! # Overview
//!
//! A [`Table`] is an ordered sequence of JSON objects sharing one column set.
//! Columns are the union of keys seen across all rows, in first-seen order,
//! and every row carries every column with `null` as the absent marker. All
//! reshaping done by the normalizer and the data facade is expressed as
//! column and row operations on this type.

mod types;

pub use types::Table;
