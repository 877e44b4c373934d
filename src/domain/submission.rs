//! src/domain/submission.rs

use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_form::ContactForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("name, email and message must all be non-empty")]
    MissingFields,

    #[error("email does not look like an address")]
    InvalidEmail,
}

/// A contact request that passed validation, trimmed and ready to relay.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: ContactEmail,
    pub message: String,
}

impl TryFrom<ContactForm> for Submission {
    type Error = SubmissionError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        let email =
            ContactEmail::parse(email.to_string()).map_err(|_| SubmissionError::InvalidEmail)?;

        Ok(Self {
            name: name.to_string(),
            email,
            message: message.to_string(),
        })
    }
}
