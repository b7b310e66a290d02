//! HTTP transport for the learned chess engine
//!
//! - `api` - axum router and handlers
//! - `config` - command-line / environment settings
//! - `error` - JSON error responses

pub mod api;
pub mod config;
pub mod error;
