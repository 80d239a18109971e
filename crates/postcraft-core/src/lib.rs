//! # Postcraft Core
//!
//! The domain layer of Postcraft: event descriptions, generated post texts,
//! the workspace state machine and the ports infrastructure must implement.
//! This crate contains pure logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod generator;
pub mod ports;

pub use error::{DomainError, ValidationError};
