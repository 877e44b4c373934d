//! src/domain/topic_arn.rs

use crate::config::TOPIC_ARN_PLACEHOLDER;

/// Destination topic every notification is published to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicArn(String);

impl TopicArn {
    pub fn new(arn: impl Into<String>) -> Self {
        Self(arn.into())
    }

    /// True while deployment tooling has not injected a real topic yet.
    pub fn is_placeholder(&self) -> bool {
        self.0 == TOPIC_ARN_PLACEHOLDER
    }
}

impl AsRef<str> for TopicArn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TopicArn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
