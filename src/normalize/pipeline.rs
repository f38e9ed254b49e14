//! Normalization steps

use crate::html::{extract_evaluation_message, strip_tags, unescape_entities};
use crate::table::Table;
use crate::types::{scalar_to_string, JsonObject, JsonValue};
use tracing::{debug, info};

/// Columns exposed for a candidate, in output order (`review` follows when derived)
pub const ALLOWED_COLUMNS: &[&str] = &[
    "id", "name", "gender", "cvs", "email", "phone", "form", "stage_id",
];

/// Date-of-birth fields removed from every record
pub const DOB_COLUMNS: &[&str] = &["dob_day", "dob_month", "dob_year"];

const REVIEW_COLUMN: &str = "review";

/// Normalize a raw candidate list payload
///
/// Returns `None` when the payload has no `candidates` array; that is the
/// platform's way of saying there is nothing to show, not a failure.
pub fn normalize_candidates(payload: &JsonValue) -> Option<Table> {
    let Some(records) = payload.get("candidates").and_then(JsonValue::as_array) else {
        info!("no candidates found in response");
        return None;
    };

    let mut table = Table::from_records(records.iter().cloned());
    debug!(
        rows = table.len(),
        columns = table.columns().len(),
        "normalizing candidates"
    );

    table.map_column("cvs", first_cv);
    table.map_column("title", |v| match v.as_str() {
        Some(s) => JsonValue::String(strip_tags(s)),
        None => v.clone(),
    });
    table.map_column("name", |v| match v.as_str() {
        Some(s) => JsonValue::String(unescape_entities(s)),
        None => v.clone(),
    });
    for column in DOB_COLUMNS {
        table.drop_column(column);
    }
    let review_derived = derive_review(&mut table);

    let table = filter_and_project(table, review_derived);
    let table = pivot_form(table);
    let table = prune_empty_columns(table);

    debug!(
        rows = table.len(),
        columns = table.columns().len(),
        "candidates normalized"
    );
    Some(table)
}

/// First attachment of a `cvs` array, or null
fn first_cv(value: &JsonValue) -> JsonValue {
    value
        .as_array()
        .and_then(|cvs| cvs.first())
        .cloned()
        .unwrap_or(JsonValue::Null)
}

/// Replace `evaluations` with a plain-text `review` column
fn derive_review(table: &mut Table) -> bool {
    let Some(evaluations) = table.take_column("evaluations") else {
        return false;
    };

    let mut reviews = evaluations.iter().map(|evaluations| {
        extract_evaluation_message(evaluations).map_or(JsonValue::Null, JsonValue::String)
    });
    table.set_column(REVIEW_COLUMN, |_| reviews.next().unwrap_or(JsonValue::Null));
    true
}

/// Drop candidates without a CV, then all-null columns, then project
///
/// The projection keeps [`ALLOWED_COLUMNS`] plus `review` when it was
/// derived, in that order, skipping any that are no longer present.
pub fn filter_and_project(mut table: Table, review_derived: bool) -> Table {
    let before = table.len();
    table.retain_rows(|row| row.get("cvs").is_some_and(|cv| !cv.is_null()));
    if table.len() < before {
        debug!(dropped = before - table.len(), "dropped candidates without a CV");
    }

    table.drop_null_columns();

    let mut columns: Vec<&str> = ALLOWED_COLUMNS.to_vec();
    if review_derived {
        columns.push(REVIEW_COLUMN);
    }
    table.select(&columns);
    table
}

/// Pivot the `form` column into one column per form field id
///
/// Each row's `form` is an array of `{id, value}` objects; anything else
/// counts as an empty form. Items without a scalar `id` are skipped. Form
/// columns follow the fixed columns in first-seen order and never replace a
/// fixed column of the same name.
pub fn pivot_form(mut table: Table) -> Table {
    let Some(forms) = table.take_column("form") else {
        return table;
    };

    let pivoted: Vec<JsonObject> = forms
        .iter()
        .map(|form| {
            let mut fields = JsonObject::new();
            for item in form.as_array().into_iter().flatten() {
                let Some(id) = item.get("id").and_then(scalar_to_string) else {
                    continue;
                };
                if table.has_column(&id) {
                    continue;
                }
                let value = item.get("value").cloned().unwrap_or(JsonValue::Null);
                fields.insert(id, value);
            }
            fields
        })
        .collect();

    table.append_columns(pivoted);
    table
}

/// Drop columns that are null in every row, then columns that are `""` in every row
pub fn prune_empty_columns(mut table: Table) -> Table {
    table.drop_null_columns();
    table.drop_blank_columns();
    table
}
