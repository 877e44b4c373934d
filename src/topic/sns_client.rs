//! src/topic/sns_client.rs

use std::collections::BTreeMap;

use anyhow::Context;
use chrono::Utc;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::config::TopicSettings;
use crate::domain::TopicArn;
use crate::topic::publisher::{PublishError, PublishReceipt, Publisher};
use crate::topic::signing::Signer;

const SNS_API_VERSION: &str = "2010-03-31";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PublishReply {
    publish_response: PublishResponse,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PublishResponse {
    publish_result: PublishResult,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PublishResult {
    message_id: Option<String>,
}

/// Publishes to SNS through its Query API, signed with SigV4.
pub struct SnsClient {
    http_client: Client,
    endpoint: Url,
    signer: Signer,
}

impl SnsClient {
    pub fn new(settings: &TopicSettings) -> Result<Self, anyhow::Error> {
        let endpoint = Url::parse(&settings.endpoint())
            .with_context(|| format!("Invalid SNS endpoint {}", settings.endpoint()))?;
        let http_client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .context("Failed to build the SNS http client")?;

        Ok(Self {
            http_client,
            endpoint,
            signer: Signer::new(settings.credentials(), settings.region.clone(), "sns"),
        })
    }

    fn host(&self) -> String {
        let host = self.endpoint.host_str().unwrap_or_default();
        match self.endpoint.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }
}

fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait::async_trait]
impl Publisher for SnsClient {
    #[tracing::instrument(name = "Publishing to SNS topic", skip(self, subject, message))]
    async fn publish(
        &self,
        topic_arn: &TopicArn,
        subject: &str,
        message: &str,
    ) -> Result<PublishReceipt, PublishError> {
        let body = form_body(&[
            ("Action", "Publish"),
            ("Message", message),
            ("Subject", subject),
            ("TopicArn", topic_arn.as_ref()),
            ("Version", SNS_API_VERSION),
        ]);

        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), FORM_CONTENT_TYPE.to_string());
        headers.insert("host".to_string(), self.host());
        self.signer
            .sign(
                "POST",
                self.endpoint.path(),
                &mut headers,
                body.as_bytes(),
                Utc::now(),
            )
            .map_err(PublishError::Signing)?;

        // reqwest derives Host from the url itself
        let request = headers
            .iter()
            .filter(|(name, _)| name.as_str() != "host")
            .fold(
                self.http_client.post(self.endpoint.clone()),
                |request, (name, value)| request.header(name.as_str(), value.as_str()),
            )
            .header(ACCEPT, "application/json")
            .body(body);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %body, "SNS rejected the publish request");
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let message_id = response
            .json::<PublishReply>()
            .await
            .ok()
            .and_then(|reply| reply.publish_response.publish_result.message_id);

        Ok(PublishReceipt { message_id })
    }
}
