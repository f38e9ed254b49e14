//! HTML text extraction
//!
//! Rich-text fields from the hiring platform (job descriptions, evaluation
//! notes, display names) arrive as HTML fragments. This module turns them
//! into plain text.

mod extract;

pub use extract::{extract_evaluation_message, html_to_plain_text, strip_tags, unescape_entities};
