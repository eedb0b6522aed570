use thiserror::Error;

/// A property-set problem detected before any remote call.
///
/// The message text is echoed verbatim in the FAILED callback, so it has to
/// stay actionable for the template author.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing {0}")]
    MissingRequiredField(String),

    #[error("Invalid service name \"{0}\"")]
    InvalidServiceName(String),

    #[error("Invalid variable {0}")]
    UnrecognizedField(String),

    #[error("Invalid type for {field}: expected {expected}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
    },
}
