//! src/domain/notification.rs

use chrono::{DateTime, Utc};

use crate::domain::submission::Submission;

/// Moment a submission was accepted, rendered as `YYYY-MM-DD HH:MM:SS UTC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAt(DateTime<Utc>);

impl SubmittedAt {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl std::fmt::Display for SubmittedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

/// Human readable message sent to the topic subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn compose(submission: &Submission, submitted_at: SubmittedAt, site_name: &str) -> Self {
        let subject = format!("Contact Form: Message from {}", submission.name);
        let body = format!(
            "New Contact Form Submission - {timestamp}\n\
            \n\
            Name: {name}\n\
            Email: {email}\n\
            \n\
            Message:\n\
            {message}\n\
            \n\
            ---\n\
            This message was sent from the contact form on {site}",
            timestamp = submitted_at,
            name = submission.name,
            email = submission.email,
            message = submission.message,
            site = site_name,
        );

        Self { subject, body }
    }
}
