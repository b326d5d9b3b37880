//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// API key missing from the app configuration
    #[error("API key has not been defined. Set `api_key` in the app config before synthesizing")]
    MissingApiKey,

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] opsdeck_compiler::CompileError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message() {
        let error = SdkError::MissingApiKey;
        assert!(error.to_string().contains("API key"));
    }

    #[test]
    fn test_compile_error_conversion() {
        let sdk_error: SdkError = opsdeck_compiler::CompileError::EmptyStage.into();
        assert!(sdk_error.to_string().contains("Compiler error"));
    }
}
