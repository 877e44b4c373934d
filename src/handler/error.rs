use std::fmt::Formatter;

use actix_web::http::StatusCode;

use crate::domain::SubmissionError;
use crate::utils::error_helpers::error_chain_fmt;

/// Every way a contact submission can fail.
///
/// `Display` is the exact text returned to the caller, so it never carries
/// details of the submission or of the underlying cause.
#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("No request body provided")]
    MissingBody,

    #[error("Invalid JSON in request body")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Missing required fields: name, email, and message are all required")]
    MissingFields,

    #[error("Invalid email address format")]
    InvalidEmail,

    #[error("Failed to send message. Please try again later.")]
    PublishFailure(#[source] anyhow::Error),
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MissingBody
            | ContactError::MalformedJson(_)
            | ContactError::MissingFields
            | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::PublishFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SubmissionError> for ContactError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::MissingFields => ContactError::MissingFields,
            SubmissionError::InvalidEmail => ContactError::InvalidEmail,
        }
    }
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
