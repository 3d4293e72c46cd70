//! Error taxonomy for the dashboard core.
//!
//! All three variants are construction-time failures over developer-controlled
//! constants; policy is fail fast with a descriptive message, no retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// An option value outside its fixed domain.
    #[error("unrecognized value {value:?} for option {option}")]
    Configuration { option: &'static str, value: String },

    /// A metric needs more history than the series carries.
    #[error("series {series:?} has {actual} points, metric needs {required}")]
    InsufficientData {
        series: String,
        required: usize,
        actual: usize,
    },

    /// Duplicate key where uniqueness is required.
    #[error("duplicate {what} {key:?}")]
    InvariantViolation { what: &'static str, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = ExplorerError::Configuration {
            option: "projection",
            value: "globe".into(),
        };
        assert!(err.to_string().contains("projection"));
        assert!(err.to_string().contains("globe"));

        let err = ExplorerError::InvariantViolation {
            what: "iso code",
            key: "USA".into(),
        };
        assert!(err.to_string().contains("USA"));
    }
}
