// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # hiring-bridge
//!
//! Republishes a Base Hiring account's openings, stages and candidates as
//! flat, assistant-friendly tables over a small HTTP API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hiring_bridge::{AppConfig, BaseHiringClient, HiringService, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let client = BaseHiringClient::new(&config.remote)?;
//!     let service = HiringService::new(client, config.candidate_link()?);
//!
//!     let candidates = service
//!         .get_candidates("42", config.access_token()?, Some(&[1, 2][..]))
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&candidates)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP API (axum)   /candidates /job-openings /stages     │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴─────────────────────────────┐
//! │  HiringService: stage filter, stage_name, candidate_link │
//! └──────────┬───────────────────────────────┬───────────────┘
//!            │                               │
//! ┌──────────┴──────────┐         ┌──────────┴──────────┐
//! │ normalize + table   │         │ remote (HiringApi)  │
//! │ cvs, html, form     │         │ POST form, token    │
//! └─────────────────────┘         └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Service configuration
pub mod config;

/// Form-POST HTTP transport
pub mod http;

/// Base Hiring API client
pub mod remote;

/// Column-aligned record tables
pub mod table;

/// HTML to text helpers
pub mod html;

/// Candidate normalization pipeline
pub mod normalize;

/// Openings, stages and candidates facade
pub mod service;

/// Template interpolation
pub mod template;

/// Localized response messages
pub mod messages;

/// CSV export
pub mod output;

/// Command-line interface and HTTP server
pub mod cli;

/// Log filter selection
pub mod logging;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::AppConfig;
pub use normalize::normalize_candidates;
pub use remote::{BaseHiringClient, HiringApi};
pub use service::HiringService;
pub use table::Table;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
