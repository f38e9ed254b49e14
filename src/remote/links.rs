//! Links copied from the hiring web app

use crate::error::{Error, Result};
use url::Url;

/// Host of the hiring web app
pub const APP_HOST: &str = "hiring.base.vn";

const LINK_SHAPE: &str = "url must look like https://hiring.base.vn/opening/candidates/<opening_id>?stage=<stage_id>";

/// An opening's candidate board filtered to one stage
///
/// Parsed from `https://hiring.base.vn/opening/candidates/<opening_id>?stage=<stage_id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatesLink {
    pub opening_id: String,
    pub stage_id: i64,
}

impl CandidatesLink {
    /// Parse a candidate board link
    pub fn parse(link: &str) -> Result<Self> {
        let invalid = || Error::invalid_param("url", LINK_SHAPE);

        let url = Url::parse(link.trim()).map_err(|_| invalid())?;
        if url.scheme() != "https" || url.host_str() != Some(APP_HOST) {
            return Err(invalid());
        }

        let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
        let opening_id = match segments.as_slice() {
            ["opening", "candidates", id] if is_numeric(id) => (*id).to_string(),
            _ => return Err(invalid()),
        };

        let mut pairs = url.query_pairs();
        let stage_id = match (pairs.next(), pairs.next()) {
            (Some((key, value)), None) if key == "stage" && is_numeric(&value) => {
                value.parse::<i64>().map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };

        Ok(Self {
            opening_id,
            stage_id,
        })
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
