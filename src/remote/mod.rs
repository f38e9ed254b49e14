//! Base Hiring public API client
//!
//! Three endpoints are consumed, all `POST` with form-encoded bodies and the
//! access token in the body:
//!
//! - `opening/list` - every opening visible to the token
//! - `opening/get` - one opening with its description and stage stats
//! - `candidate/list` - candidates of one opening
//!
//! [`CandidatesLink`] reads the opening and stage out of a candidate board
//! link pasted from the web app.
//!
//! [`HiringApi`] is the seam the data facade depends on; [`BaseHiringClient`]
//! is the production implementation.

mod client;
mod links;

pub use client::{
    BaseHiringClient, HiringApi, CANDIDATE_LIST_PATH, OPENING_GET_PATH, OPENING_LIST_PATH,
};
pub use links::{CandidatesLink, APP_HOST};
