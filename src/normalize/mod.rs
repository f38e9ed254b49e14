//! Candidate record normalizer
//!
//! # Overview
//!
//! The candidate list endpoint returns heterogeneous objects: field sets vary
//! per record, rich text is HTML, attachments are arrays and custom
//! application questions arrive as a nested `form` array. The normalizer
//! reshapes one payload into a flat [`Table`](crate::table::Table):
//!
//! 1. first CV only, cleaned `title` and `name`, no date of birth
//! 2. `review` derived from the first evaluation
//! 3. candidates without a CV dropped
//! 4. projection onto the public columns
//! 5. `form` pivoted into one column per form field id
//! 6. columns that carry nothing (all null or all `""`) pruned
//!
//! Every step is skipped when its field is missing from the batch. Row order
//! is the source order.

mod pipeline;

pub use pipeline::{
    filter_and_project, normalize_candidates, pivot_form, prune_empty_columns, ALLOWED_COLUMNS,
    DOB_COLUMNS,
};

#[cfg(test)]
mod tests;
