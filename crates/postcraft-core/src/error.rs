//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },
}

/// Validation failures surfaced to the organizer.
///
/// The `Display` output is the notice shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("イベント名、日時、場所を入力してください")]
    MissingEventFields,

    #[error("文章を生成してください")]
    NothingGenerated,

    #[error("不正な値です: {field}={value}")]
    UnknownOption { field: &'static str, value: String },
}

/// Post store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend failed: {0}")]
    Backend(String),
}
