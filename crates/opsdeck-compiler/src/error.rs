//! Error types for the opsdeck compiler

use thiserror::Error;

/// Compile error type
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("App stage value must have at least one character")]
    EmptyStage,

    #[error("Execution role external id must be at least 6 characters long")]
    ExternalIdTooShort,

    #[error("Duplicate page id: {0}")]
    DuplicatePageId(String),
}

pub type Result<T> = std::result::Result<T, CompileError>;
