//! Error types for edgewalk
//!
//! Two error kinds belong to the traversal itself:
//! - invalid orientation: raised immediately, when a mode is parsed or selected
//! - invalid expansion supplier: raised lazily, on the first pull of a traversal
//!
//! The remaining variants cover loading requests and configuration.

mod macros;

use thiserror::Error;

/// Errors that can occur during edgewalk operations
#[derive(Error, Debug)]
pub enum EdgeWalkError {
    #[error("invalid orientation argument: {value} (expected: none, original, reverse, ignore)")]
    InvalidOrientation { value: String },

    #[error("invalid expansion supplier: {supplier} is not callable")]
    InvalidExpansionSupplier { supplier: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl EdgeWalkError {
    /// Create an error for an unrecognized orientation mode
    pub fn invalid_orientation(value: impl std::fmt::Display) -> Self {
        EdgeWalkError::InvalidOrientation {
            value: value.to_string(),
        }
    }

    /// Create an error for an expansion supplier that resolves to nothing callable
    pub fn invalid_supplier(supplier: impl std::fmt::Display) -> Self {
        EdgeWalkError::InvalidExpansionSupplier {
            supplier: supplier.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        EdgeWalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            EdgeWalkError::InvalidOrientation { .. } => "invalid_orientation",
            EdgeWalkError::InvalidExpansionSupplier { .. } => "invalid_expansion_supplier",
            EdgeWalkError::InvalidValue { .. } => "invalid_value",
            EdgeWalkError::Io(_) => "io_error",
            EdgeWalkError::Json(_) => "json_error",
            EdgeWalkError::Toml(_) => "toml_error",
            EdgeWalkError::Other(_) => "other",
        }
    }

    /// Whether the error came from a caller-supplied argument rather than I/O
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            EdgeWalkError::InvalidOrientation { .. }
                | EdgeWalkError::InvalidExpansionSupplier { .. }
                | EdgeWalkError::InvalidValue { .. }
        )
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for edgewalk operations
pub type Result<T> = std::result::Result<T, EdgeWalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_orientation_message() {
        let err = EdgeWalkError::invalid_orientation("sideways");
        assert_eq!(
            err.to_string(),
            "invalid orientation argument: sideways (expected: none, original, reverse, ignore)"
        );
        assert_eq!(err.error_type(), "invalid_orientation");
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_invalid_supplier_message() {
        let err = EdgeWalkError::invalid_supplier("\"hi\"");
        assert_eq!(
            err.to_string(),
            "invalid expansion supplier: \"hi\" is not callable"
        );
        assert_eq!(err.error_type(), "invalid_expansion_supplier");
    }

    #[test]
    fn test_io_error_is_not_argument_error() {
        let err = EdgeWalkError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(!err.is_argument_error());
        assert_eq!(err.error_type(), "io_error");
    }

    #[test]
    fn test_to_json_shape() {
        let err = EdgeWalkError::invalid_value("config version", 9);
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid config version: 9");
    }
}
