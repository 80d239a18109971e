//! # Postcraft Shared
//!
//! Wire types for the JSON API. Field names are camelCase to match the form
//! field names used by the browser page.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
