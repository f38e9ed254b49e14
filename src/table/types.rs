//! Table type and column operations

use crate::types::{is_absent, JsonObject, JsonValue};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Rows of JSON objects with a uniform, ordered column set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<JsonObject>,
}

impl Table {
    /// Create an empty table with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary JSON records
    ///
    /// Non-object records carry no columns and are skipped.
    pub fn from_records(records: impl IntoIterator<Item = JsonValue>) -> Self {
        let rows = records
            .into_iter()
            .filter_map(|record| match record {
                JsonValue::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Build a table from objects, filling columns a row lacks with `null`
    pub fn from_rows(rows: Vec<JsonObject>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Self {
            columns,
            rows: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            let aligned = table.align(row);
            table.rows.push(aligned);
        }
        table
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order
    pub fn rows(&self) -> &[JsonObject] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the table has a column with this name
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Iterate over one column's cells; yields nothing for an unknown column
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a JsonValue> + 'a {
        self.rows.iter().filter_map(move |row| row.get(name))
    }

    /// Rewrite every cell of a column in place; no-op for an unknown column
    pub fn map_column<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(&JsonValue) -> JsonValue,
    {
        if !self.has_column(name) {
            return;
        }
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(name) {
                *cell = f(cell);
            }
        }
    }

    /// Add (or overwrite) a column computed from each row
    pub fn set_column<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(&JsonObject) -> JsonValue,
    {
        for row in &mut self.rows {
            let value = f(row);
            row.insert(name.to_string(), value);
        }
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    /// Remove a column, returning whether it existed
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(pos) = self.columns.iter().position(|c| c == name) else {
            return false;
        };
        self.columns.remove(pos);
        for row in &mut self.rows {
            row.shift_remove(name);
        }
        true
    }

    /// Remove a column and return its cells, one per row
    pub fn take_column(&mut self, name: &str) -> Option<Vec<JsonValue>> {
        let pos = self.columns.iter().position(|c| c == name)?;
        self.columns.remove(pos);
        Some(
            self.rows
                .iter_mut()
                .map(|row| row.shift_remove(name).unwrap_or(JsonValue::Null))
                .collect(),
        )
    }

    /// Keep only the named columns that exist, in the order given
    pub fn select(&mut self, names: &[&str]) {
        let columns: Vec<String> = names
            .iter()
            .filter(|n| self.has_column(n))
            .map(|n| (*n).to_string())
            .collect();

        for row in &mut self.rows {
            let mut selected = JsonObject::new();
            for column in &columns {
                let value = row.remove(column).unwrap_or(JsonValue::Null);
                selected.insert(column.clone(), value);
            }
            *row = selected;
        }
        self.columns = columns;
    }

    /// Keep rows matching a predicate, preserving order
    pub fn retain_rows<F>(&mut self, f: F)
    where
        F: FnMut(&JsonObject) -> bool,
    {
        self.rows.retain(f);
    }

    /// Append columns from per-row objects, aligning row i with `extra[i]`
    ///
    /// Cells a row lacks are `null`. Existing columns with the same name are
    /// overwritten.
    pub fn append_columns(&mut self, extra: Vec<JsonObject>) {
        let mut new_columns: Vec<String> = Vec::new();
        for map in &extra {
            for key in map.keys() {
                if !new_columns.iter().any(|c| c == key) {
                    new_columns.push(key.clone());
                }
            }
        }

        let mut extra = extra.into_iter();
        for row in &mut self.rows {
            let mut cells = extra.next().unwrap_or_default();
            for column in &new_columns {
                let value = cells.remove(column).unwrap_or(JsonValue::Null);
                row.insert(column.clone(), value);
            }
        }

        for column in new_columns {
            if !self.has_column(&column) {
                self.columns.push(column);
            }
        }
    }

    /// Drop every column whose cells are all absent
    ///
    /// A table without rows loses all of its columns.
    pub fn drop_null_columns(&mut self) {
        self.drop_columns_where(is_absent);
    }

    /// Drop every column whose cells are all the empty string
    pub fn drop_blank_columns(&mut self) {
        self.drop_columns_where(|v| v.as_str() == Some(""));
    }

    /// Replace every empty-string cell with the absent marker
    pub fn replace_empty_strings(&mut self) {
        for row in &mut self.rows {
            for cell in row.values_mut() {
                if cell.as_str() == Some("") {
                    *cell = JsonValue::Null;
                }
            }
        }
    }

    /// Rows as JSON values
    pub fn to_records(&self) -> Vec<JsonValue> {
        self.rows.iter().cloned().map(JsonValue::Object).collect()
    }

    fn drop_columns_where<P>(&mut self, mut pred: P)
    where
        P: FnMut(&JsonValue) -> bool,
    {
        let doomed: Vec<String> = self
            .columns
            .iter()
            .filter(|c| self.column_values(c.as_str()).all(&mut pred))
            .cloned()
            .collect();
        for column in doomed {
            self.drop_column(&column);
        }
    }

    fn align(&self, mut row: JsonObject) -> JsonObject {
        let mut aligned = JsonObject::new();
        for column in &self.columns {
            let value = row.remove(column).unwrap_or(JsonValue::Null);
            aligned.insert(column.clone(), value);
        }
        aligned
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
