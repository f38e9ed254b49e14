//! Openings, stages and candidates as tables

use crate::error::Result;
use crate::html::html_to_plain_text;
use crate::http::RemoteResponse;
use crate::normalize::normalize_candidates;
use crate::remote::HiringApi;
use crate::table::Table;
use crate::template::{TemplateContext, UrlTemplate};
use crate::types::{scalar_to_string, JsonObject, JsonValue};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// `status` of an opening that is accepting candidates
pub const ACTIVE_OPENING_STATUS: &str = "10";

/// `state` of a stage in use
pub const ACTIVE_STAGE_STATE: &str = "active";

/// Read-only access to hiring data for one platform
#[derive(Debug, Clone)]
pub struct HiringService<A> {
    api: A,
    candidate_link: UrlTemplate,
}

impl<A: HiringApi> HiringService<A> {
    /// Create a service over a client, with the pattern for `candidate_link`
    pub fn new(api: A, candidate_link: UrlTemplate) -> Self {
        Self {
            api,
            candidate_link,
        }
    }

    /// Active openings as `{id, name}` rows
    ///
    /// A non-200 answer from the platform is logged and yields an empty table.
    pub async fn list_active_openings(&self, token: &str) -> Result<Table> {
        let response = self.api.fetch_opening_list(token).await?;
        let Some(body) = success_body(&response, "opening list")? else {
            return Ok(Table::new());
        };

        let openings = body
            .get("openings")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let rows = openings
            .iter()
            .filter(|o| o.get("status").and_then(JsonValue::as_str) == Some(ACTIVE_OPENING_STATUS))
            .map(id_and_name)
            .collect();
        Ok(Table::from_rows(rows))
    }

    /// Active stages of an opening as `{id, name}` rows
    ///
    /// A non-200 answer from the platform is logged and yields an empty table.
    pub async fn list_active_stages(&self, opening_id: &str, token: &str) -> Result<Table> {
        let response = self.api.fetch_opening_detail(opening_id, token).await?;
        let Some(body) = success_body(&response, "opening stages")? else {
            return Ok(Table::new());
        };

        let stages = body
            .pointer("/opening/stats/stages")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let rows = stages
            .iter()
            .filter(|s| s.get("state").and_then(JsonValue::as_str) == Some(ACTIVE_STAGE_STATE))
            .map(id_and_name)
            .collect();
        Ok(Table::from_rows(rows))
    }

    /// The opening's job description as plain text
    pub async fn fetch_job_description(&self, opening_id: &str, token: &str) -> Result<String> {
        let body = self
            .api
            .fetch_opening_detail(opening_id, token)
            .await?
            .json()?;

        let content = body
            .pointer("/opening/content")
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        Ok(html_to_plain_text(content))
    }

    /// Normalized candidates of an opening
    ///
    /// With a non-empty `stage_ids`, only candidates in those stages are kept.
    /// Empty strings become null, `stage_name` is joined from the active
    /// stages and `candidate_link` points at the candidate's profile.
    pub async fn get_candidates(
        &self,
        opening_id: &str,
        token: &str,
        stage_ids: Option<&[i64]>,
    ) -> Result<Table> {
        let payload = self.api.fetch_candidates_by_stage(opening_id, token).await?;
        let mut table = match normalize_candidates(&payload) {
            Some(table) if !table.is_empty() => table,
            _ => {
                info!(opening_id, "no candidates to return");
                return Ok(Table::new());
            }
        };

        if let Some(stage_ids) = stage_ids.filter(|ids| !ids.is_empty()) {
            let wanted: HashSet<String> = stage_ids.iter().map(ToString::to_string).collect();
            table.retain_rows(|row| {
                row.get("stage_id")
                    .and_then(scalar_to_string)
                    .is_some_and(|id| wanted.contains(&id))
            });
        }

        table.replace_empty_strings();

        let stages = self.list_active_stages(opening_id, token).await?;
        if !stages.is_empty() && table.has_column("stage_id") {
            let names = stage_names(&stages);
            table.set_column("stage_name", |row| {
                row.get("stage_id")
                    .and_then(scalar_to_string)
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or(JsonValue::Null)
            });
        }

        if table.has_column("id") {
            let mut links = Vec::with_capacity(table.len());
            for row in table.rows() {
                links.push(self.link_for(opening_id, row)?);
            }
            let mut links = links.into_iter();
            table.set_column("candidate_link", |_| links.next().unwrap_or(JsonValue::Null));
        }

        Ok(table)
    }

    fn link_for(&self, opening_id: &str, row: &JsonObject) -> Result<JsonValue> {
        let Some(candidate_id) = row.get("id").and_then(scalar_to_string) else {
            return Ok(JsonValue::Null);
        };
        let ctx = TemplateContext::new()
            .with("opening_id", opening_id)
            .with("candidate_id", candidate_id);
        Ok(JsonValue::String(self.candidate_link.render(&ctx)?))
    }
}

/// Parsed body of a 200 response, or `None` after logging any other status
fn success_body(response: &RemoteResponse, what: &str) -> Result<Option<JsonValue>> {
    if !response.is_success() {
        warn!(
            status = response.status,
            body = %response.body,
            "failed to fetch {what}"
        );
        return Ok(None);
    }
    response.json().map(Some)
}

/// `{id, name}` projection of an opening or stage
fn id_and_name(entry: &JsonValue) -> JsonObject {
    let mut row = JsonObject::new();
    for key in ["id", "name"] {
        let value = entry.get(key).cloned().unwrap_or(JsonValue::Null);
        row.insert(key.to_string(), value);
    }
    row
}

/// stage id (canonical string) → stage name
fn stage_names(stages: &Table) -> HashMap<String, JsonValue> {
    stages
        .rows()
        .iter()
        .filter_map(|row| {
            let id = row.get("id").and_then(scalar_to_string)?;
            let name = row.get("name").cloned().unwrap_or(JsonValue::Null);
            Some((id, name))
        })
        .collect()
}
