use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum SalonError {
    #[error("invalid salon hours: opens at {opens_at}, closes at {closes_at}")]
    InvalidRange { opens_at: u32, closes_at: u32 },

    #[error("instant out of representable range: {0}")]
    InvalidInstant(i64),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
}

impl From<ValidationErrors> for SalonError {
    fn from(errors: ValidationErrors) -> Self {
        SalonError::Validation(errors)
    }
}

impl SalonError {
    /// Field-level failures, when this error carries them.
    ///
    /// The transport layer renders these as a field→message map with an
    /// unprocessable status rather than a generic failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SalonError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SalonError>;
