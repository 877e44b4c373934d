use crate::domain::TopicArn;

/// Errors raised while handing a message to the topic.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to reach the topic endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("topic endpoint rejected the publish request with status {status}")]
    Rejected { status: u16, body: String },

    #[error("failed to sign the publish request")]
    Signing(#[source] anyhow::Error),
}

/// Acknowledgement returned by the topic. Opaque to callers beyond logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
}

impl std::fmt::Display for PublishReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message_id {
            Some(id) => write!(f, "message id {}", id),
            None => write!(f, "no message id"),
        }
    }
}

/// A one-way notification channel messages can be published to.
#[async_trait::async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(
        &self,
        topic_arn: &TopicArn,
        subject: &str,
        message: &str,
    ) -> Result<PublishReceipt, PublishError>;
}
