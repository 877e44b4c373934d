//! Validate a contact form submission and relay it to the notification topic.

pub mod error;
pub mod event;

use std::sync::Arc;

use anyhow::Context;
use uuid::Uuid;

use crate::domain::{ContactForm, NotificationMessage, Submission, SubmittedAt, TopicArn};
use crate::topic::Publisher;

pub use error::ContactError;
pub use event::{HandlerResponse, InboundEvent};

pub struct ContactHandler {
    publisher: Arc<dyn Publisher>,
    topic_arn: TopicArn,
    site_name: String,
}

impl ContactHandler {
    pub fn new(
        publisher: Arc<dyn Publisher>,
        topic_arn: TopicArn,
        site_name: impl Into<String>,
    ) -> Self {
        if topic_arn.is_placeholder() {
            tracing::warn!(
                %topic_arn,
                "No topic ARN configured, publishing will fail until one is provided"
            );
        }

        Self {
            publisher,
            topic_arn,
            site_name: site_name.into(),
        }
    }

    /// Always produces a response. Failures are logged here and turned into
    /// their client-facing JSON error.
    #[tracing::instrument(
        name = "Handling a contact form submission",
        skip(self, event),
        fields(
            request_id = %Uuid::new_v4(),
            http_method = ?event.http_method,
        )
    )]
    pub async fn handle(&self, event: InboundEvent) -> HandlerResponse {
        if event.is_preflight() {
            return HandlerResponse::preflight();
        }

        match self.process(event).await {
            Ok(submitted_at) => HandlerResponse::success(submitted_at),
            Err(e) => self.reject(e),
        }
    }

    /// Logs `e` and turns it into the response the caller sees.
    pub fn reject(&self, e: ContactError) -> HandlerResponse {
        match &e {
            ContactError::PublishFailure(_) => tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Error processing contact form"
            ),
            _ => tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Rejected contact form submission"
            ),
        }
        HandlerResponse::from_error(&e)
    }

    async fn process(&self, event: InboundEvent) -> Result<SubmittedAt, ContactError> {
        let body = event.body.ok_or(ContactError::MissingBody)?;
        let document: serde_json::Value =
            serde_json::from_str(&body).map_err(ContactError::MalformedJson)?;
        let submission = Submission::try_from(ContactForm::from(&document))?;

        self.relay(&submission)
            .await
            .map_err(ContactError::PublishFailure)
    }

    #[tracing::instrument(name = "Relaying submission to the topic", skip(self, submission))]
    async fn relay(&self, submission: &Submission) -> Result<SubmittedAt, anyhow::Error> {
        let submitted_at = SubmittedAt::now();
        let notification = NotificationMessage::compose(submission, submitted_at, &self.site_name);

        let receipt = self
            .publisher
            .publish(&self.topic_arn, &notification.subject, &notification.body)
            .await
            .with_context(|| format!("Failed to publish to topic {}", self.topic_arn))?;

        tracing::info!(%receipt, "Contact notification published");
        Ok(submitted_at)
    }
}
