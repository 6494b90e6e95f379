use thiserror::Error;

/// Closed set of failures the bot can run into.
///
/// Each variant carries a fixed message. Transport and parse details are
/// logged where they happen and are not part of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Required environment variables are missing")]
    TokenValidation,

    #[error("Request to the review endpoint failed")]
    BadRequest,

    #[error("Review endpoint returned a body that is not valid JSON")]
    InvalidJson,

    #[error("Expected key is missing from the API response")]
    KeyAbsence,

    #[error("Value under the homeworks key is not a list")]
    WrongHomeworkDataType,

    #[error("API response is not a JSON object")]
    WrongResponseDataType,

    #[error("Unexpected homework review verdict")]
    UnknownVerdict,

    #[error("API response contains no homeworks")]
    EmptyHomeworks,
}

impl ReviewError {
    /// Whether this error must stop the process instead of the current iteration.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReviewError::TokenValidation)
    }
}
