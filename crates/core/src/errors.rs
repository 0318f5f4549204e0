//! Core error types for the agent site estimators.
//!
//! Estimators themselves never fail: malformed numeric input degrades to a
//! default value and guard conditions are expressed as `Option`. [`Error`]
//! covers configuration loading; [`ValidationError`] is reported by the
//! lead gate and the contact form and never leaves the widgets as a failure.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the estimator crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },
}

/// Validation errors raised by the lead-capture gate and the contact form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Field '{0}' is not a valid phone number")]
    InvalidPhone(String),
}

impl ValidationError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::InvalidEmail(field)
            | ValidationError::InvalidPhone(field) => field,
        }
    }

    /// Message shown next to the offending field.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "This field is required",
            ValidationError::InvalidEmail(_) => "Please enter a valid email address",
            ValidationError::InvalidPhone(_) => "Please enter a valid phone number",
        }
    }
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
