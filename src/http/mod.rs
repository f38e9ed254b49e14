//! HTTP client module
//!
//! Thin transport over `reqwest` for the form-encoded POST calls the hiring
//! platform expects.
//!
//! # Features
//!
//! - **Base URL resolution**: relative paths are joined onto the configured base
//! - **Form bodies**: `application/x-www-form-urlencoded` POST requests
//! - **Raw responses**: status and body are handed back unchecked

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RemoteResponse};
