//! Normalizer tests

use super::*;
use crate::table::Table;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn cv(name: &str) -> Value {
    json!({"id": format!("cv-{name}"), "name": format!("{name}.pdf"), "url": format!("https://files.example.com/{name}.pdf")})
}

fn normalize(payload: Value) -> Table {
    normalize_candidates(&payload).expect("payload has candidates")
}

#[test]
fn test_missing_candidates_key_is_empty_state() {
    assert!(normalize_candidates(&json!({"code": 1, "message": "ok"})).is_none());
    assert!(normalize_candidates(&json!({"candidates": "nope"})).is_none());
    assert!(normalize_candidates(&json!([])).is_none());
    assert!(normalize_candidates(&Value::Null).is_none());
}

#[test]
fn test_empty_candidates_array() {
    let table = normalize(json!({"candidates": []}));
    assert!(table.is_empty());
    assert!(table.columns().is_empty());
}

#[test]
fn test_first_cv_is_kept() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a"), cv("b")]}
    ]}));
    assert_eq!(table.rows()[0]["cvs"], cv("a"));
}

#[test]
fn test_candidates_without_cv_are_excluded() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "name": "Has CV", "cvs": [cv("a")]},
        {"id": "2", "name": "Empty CVs", "cvs": []},
        {"id": "3", "name": "No CV key"},
        {"id": "4", "name": "Null CVs", "cvs": null},
        {"id": "5", "name": "Bad CVs", "cvs": "file.pdf"}
    ]}));

    let ids: Vec<&Value> = table.column_values("id").collect();
    assert_eq!(ids, vec![&json!("1")]);
}

#[test]
fn test_batch_without_any_cv_yields_no_rows() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "name": "A"},
        {"id": "2", "name": "B"}
    ]}));
    assert!(table.is_empty());
}

#[test]
fn test_title_tags_are_stripped() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a")], "title": "<b>Engineer</b>"}
    ]}));
    // title is not a public column, so check the step on its own
    assert!(!table.has_column("title"));

    let mut raw = Table::from_records(vec![json!({"title": "<b>Engineer</b>"}), json!({"title": 5})]);
    raw.map_column("title", |v| match v.as_str() {
        Some(s) => Value::String(crate::html::strip_tags(s)),
        None => v.clone(),
    });
    assert_eq!(raw.rows()[0]["title"], "Engineer");
    assert_eq!(raw.rows()[1]["title"], 5);
}

#[test]
fn test_name_is_unescaped() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a")], "name": "Nguy&#7877;n V&#259;n A"}
    ]}));
    assert_eq!(table.rows()[0]["name"], "Nguyễn Văn A");
}

#[test]
fn test_name_keeps_bracketed_text() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a")], "name": "R&amp;D <Team>"}
    ]}));
    assert_eq!(table.rows()[0]["name"], "R&D <Team>");
}

#[test]
fn test_dob_and_unlisted_fields_are_removed() {
    let table = normalize(json!({"candidates": [{
        "id": "1",
        "cvs": [cv("a")],
        "dob_day": "01",
        "dob_month": "02",
        "dob_year": "1990",
        "address": "Hanoi",
        "source": "LinkedIn"
    }]}));
    assert_eq!(table.columns(), &["id", "cvs"]);
}

#[test]
fn test_review_from_first_evaluation() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a")], "evaluations": [
            {"content": "<p>Solid <b>Rust</b> skills</p><p>Hire</p>"},
            {"content": "<p>second opinion</p>"}
        ]},
        {"id": "2", "cvs": [cv("b")], "evaluations": []}
    ]}));

    assert_eq!(table.columns(), &["id", "cvs", "review"]);
    assert_eq!(table.rows()[0]["review"], "Solid Rust skills Hire");
    assert_eq!(table.rows()[1]["review"], Value::Null);
    assert!(!table.has_column("evaluations"));
}

#[test]
fn test_review_dropped_when_no_candidate_has_one() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a")], "evaluations": []},
        {"id": "2", "cvs": [cv("b")]}
    ]}));
    assert!(!table.has_column("review"));
}

#[test]
fn test_form_is_pivoted_into_columns() {
    let table = normalize(json!({"candidates": [{
        "id": "1",
        "cvs": [cv("a")],
        "form": [{"id": "f1", "value": "x"}, {"id": "f2", "value": "y"}]
    }]}));

    assert_eq!(table.columns(), &["id", "cvs", "f1", "f2"]);
    assert_eq!(table.rows()[0]["f1"], "x");
    assert_eq!(table.rows()[0]["f2"], "y");
    assert!(!table.has_column("form"));
}

#[test]
fn test_form_columns_union_and_row_alignment() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "form": [{"id": "salary", "value": "1000"}]},
        {"id": "2", "cvs": [cv("b")], "form": [{"id": "salary", "value": "2000"}, {"id": "notice", "value": "30d"}]},
        {"id": "3", "cvs": [cv("c")], "form": "not a list"},
        {"id": "4", "cvs": [cv("d")], "form": [{"id": "notice", "value": "now"}, {"value": "orphan"}]}
    ]}));

    assert_eq!(table.columns(), &["id", "cvs", "salary", "notice"]);
    let salary: Vec<&Value> = table.column_values("salary").collect();
    assert_eq!(salary, vec![&json!("2000"), &Value::Null, &Value::Null]);
    let notice: Vec<&Value> = table.column_values("notice").collect();
    assert_eq!(notice, vec![&json!("30d"), &Value::Null, &json!("now")]);
}

#[test]
fn test_form_field_does_not_replace_fixed_column() {
    let table = normalize(json!({"candidates": [{
        "id": "1",
        "cvs": [cv("a")],
        "email": "real@example.com",
        "form": [{"id": "email", "value": "typed@example.com"}]
    }]}));
    assert_eq!(table.rows()[0]["email"], "real@example.com");
}

#[test]
fn test_all_null_and_all_blank_columns_are_pruned() {
    let table = normalize(json!({"candidates": [
        {"id": "1", "cvs": [cv("a")], "gender": null, "phone": "", "email": "", "form": [{"id": "f1", "value": ""}, {"id": "f2", "value": null}]},
        {"id": "2", "cvs": [cv("b")], "gender": null, "phone": "", "email": "b@example.com", "form": [{"id": "f1", "value": ""}]}
    ]}));

    assert_eq!(table.columns(), &["id", "cvs", "email"]);
    assert_eq!(table.rows()[0]["email"], "");
}

#[test]
fn test_column_order_follows_allow_list() {
    let table = normalize(json!({"candidates": [{
        "stage_id": "11",
        "phone": "0900",
        "email": "a@example.com",
        "gender": "female",
        "name": "A",
        "id": "1",
        "cvs": [cv("a")]
    }]}));
    assert_eq!(
        table.columns(),
        &["id", "name", "gender", "cvs", "email", "phone", "stage_id"]
    );
}

#[test]
fn test_source_order_is_preserved() {
    let table = normalize(json!({"candidates": [
        {"id": "9", "cvs": [cv("a")]},
        {"id": "3", "cvs": [cv("b")]},
        {"id": "5", "cvs": [cv("c")]}
    ]}));
    let ids: Vec<&Value> = table.column_values("id").collect();
    assert_eq!(ids, vec![&json!("9"), &json!("3"), &json!("5")]);
}

#[test]
fn test_filter_and_project_standalone() {
    let table = Table::from_records(vec![
        json!({"id": 1, "cvs": {"id": "x"}, "secret": "s", "stage_id": null}),
        json!({"id": 2, "cvs": null, "secret": "t", "stage_id": "5"}),
    ]);
    let projected = filter_and_project(table, false);
    assert_eq!(projected.columns(), &["id", "cvs"]);
    assert_eq!(projected.len(), 1);
}

#[test]
fn test_prune_empty_columns_standalone() {
    let table = Table::from_records(vec![
        json!({"a": null, "b": "", "c": "x"}),
        json!({"a": null, "b": "", "c": ""}),
    ]);
    let pruned = prune_empty_columns(table);
    assert_eq!(pruned.columns(), &["c"]);
}

#[test]
fn test_pivot_form_without_form_column_is_identity() {
    let table = Table::from_records(vec![json!({"id": 1})]);
    assert_eq!(pivot_form(table.clone()), table);
}
