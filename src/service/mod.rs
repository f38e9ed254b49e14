//! Data access facade
//!
//! Combines the remote client, the normalizer and the stage/opening lookups
//! into ready-to-serve tables. Each call fetches fresh data; nothing is kept
//! between calls.

mod hiring;

pub use hiring::{HiringService, ACTIVE_OPENING_STATUS, ACTIVE_STAGE_STATE};
