//! Error types for carousel construction.

use thiserror::Error;

/// Failure raised by a host surface operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host operation '{operation}' failed: {detail}")]
pub struct HostError {
    /// Operation identifier.
    pub operation: &'static str,
    /// Host-provided failure detail.
    pub detail: String,
}

impl HostError {
    /// Build a host error for the given operation.
    #[must_use]
    pub fn new(operation: &'static str, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }
}

/// Primary error type for carousel construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// `loop` and `infinite` were both enabled.
    #[error("a carousel cannot be both looping and infinite")]
    LoopAndInfinite,
    /// An option contained an invalid value.
    #[error("invalid value for option '{field}': {message}")]
    InvalidOption {
        /// Option that failed validation.
        field: &'static str,
        /// Human-readable error description.
        message: String,
    },
    /// Building the carousel structure failed on the host.
    #[error("failed to build carousel structure")]
    Host(#[from] HostError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_formats_operation_and_detail() {
        let err = HostError::new("create_div", "document unavailable");
        assert_eq!(err.operation, "create_div");
        assert_eq!(
            err.to_string(),
            "host operation 'create_div' failed: document unavailable"
        );
    }

    #[test]
    fn host_error_converts_into_carousel_error() {
        let err: CarouselError = HostError::new("append_child", "detached").into();
        assert!(matches!(err, CarouselError::Host(_)));
        assert_eq!(err.to_string(), "failed to build carousel structure");
    }

    #[test]
    fn invalid_option_names_field() {
        let err = CarouselError::InvalidOption {
            field: "slidesVisible",
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for option 'slidesVisible': must be at least 1"
        );
    }
}
