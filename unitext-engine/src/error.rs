//! Engine error types

use thiserror::Error;
use unitext_core::CoreError;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bad locale, option name or configuration value
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Break engine could not be built or produced an invalid offset
    #[error("segmentation error: {0}")]
    Segmentation(String),

    /// Collation data could not be loaded or a sort key could not be written
    #[error("collation error: {0}")]
    Collation(String),
}

impl EngineError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        EngineError::Configuration(msg.into())
    }

    pub(crate) fn segmentation(msg: impl std::fmt::Display) -> Self {
        EngineError::Segmentation(msg.to_string())
    }

    pub(crate) fn collation(msg: impl std::fmt::Display) -> Self {
        EngineError::Collation(msg.to_string())
    }
}

impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OffsetOutOfRange { .. }
            | CoreError::SplitSurrogate { .. }
            | CoreError::NonMonotonicOffset { .. } => EngineError::Segmentation(err.to_string()),
            _ => EngineError::Configuration(err.to_string()),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_name_errors_map_to_configuration() {
        let err: EngineError = CoreError::UnknownStrength("bogus".into()).into();
        assert!(matches!(err, EngineError::Configuration(_)));
        assert!(err.to_string().contains("invalid strength 'bogus'"));
    }

    #[test]
    fn test_core_offset_errors_map_to_segmentation() {
        let err: EngineError = CoreError::SplitSurrogate { offset: 3 }.into();
        assert!(matches!(err, EngineError::Segmentation(_)));
    }
}
