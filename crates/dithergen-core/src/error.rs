//! Error types for parameter parsing and validation.
//!
//! Frame production itself never fails; these errors only surface at the
//! configuration boundary (parsing names, validating host-supplied values).

use thiserror::Error;

/// Errors from building or parsing generation inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DithergenError {
    #[error("unknown pattern kind: '{0}'")]
    UnknownPatternKind(String),

    #[error("unknown user action: '{0}'")]
    UnknownAction(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DithergenError::UnknownPatternKind("plaid".into()).to_string(),
            "unknown pattern kind: 'plaid'"
        );
        assert_eq!(
            DithergenError::InvalidParameter("frequency must be finite".into()).to_string(),
            "invalid parameter: frequency must be finite"
        );
    }
}
