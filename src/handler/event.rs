use std::collections::BTreeMap;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::de::Error as _;
use serde_json::Value;

use crate::domain::SubmittedAt;
use crate::handler::error::ContactError;

const SUCCESS_MESSAGE: &str = "Message sent successfully! Thank you for reaching out.";

/// The slice of the platform's HTTP event the handler reads.
#[derive(Debug, Default, Clone)]
pub struct InboundEvent {
    pub http_method: Option<String>,
    pub body: Option<String>,
}

impl InboundEvent {
    pub fn is_preflight(&self) -> bool {
        self.http_method.as_deref() == Some("OPTIONS")
    }

    /// Event for a plain HTTP request. An empty body counts as absent and a
    /// body that is not UTF-8 cannot be JSON.
    pub fn from_http(method: &str, body: &[u8]) -> Result<Self, ContactError> {
        let mut event = Self {
            http_method: Some(method.to_string()),
            body: None,
        };
        if event.is_preflight() || body.is_empty() {
            return Ok(event);
        }

        let body = String::from_utf8(body.to_vec()).map_err(malformed)?;
        event.body = Some(body);
        Ok(event)
    }
}

/// Reads `httpMethod` and `body` from a platform event document.
///
/// A preflight never looks at its body. Otherwise a `body` that is present
/// but not a string is rejected as malformed.
impl TryFrom<&Value> for InboundEvent {
    type Error = ContactError;

    fn try_from(document: &Value) -> Result<Self, Self::Error> {
        let mut event = Self {
            http_method: document
                .get("httpMethod")
                .and_then(Value::as_str)
                .map(String::from),
            body: None,
        };
        if event.is_preflight() {
            return Ok(event);
        }

        event.body = match document.get("body") {
            None | Some(Value::Null) => None,
            Some(Value::String(body)) => Some(body.clone()),
            Some(_) => return Err(malformed("event body is not a string")),
        };
        Ok(event)
    }
}

fn malformed(reason: impl std::fmt::Display) -> ContactError {
    ContactError::MalformedJson(serde_json::Error::custom(reason))
}

/// What the handler hands back to the platform for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    fn json(status: StatusCode, body: serde_json::Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code: status.as_u16(),
            headers,
            body: body.to_string(),
        }
    }

    /// CORS headers themselves are added by the hosting platform.
    pub fn preflight() -> Self {
        Self::json(
            StatusCode::OK,
            serde_json::json!({ "message": "CORS preflight" }),
        )
    }

    pub fn success(submitted_at: SubmittedAt) -> Self {
        Self::json(
            StatusCode::OK,
            serde_json::json!({
                "message": SUCCESS_MESSAGE,
                "timestamp": submitted_at.to_string(),
            }),
        )
    }

    pub fn from_error(error: &ContactError) -> Self {
        Self::json(
            error.status_code(),
            serde_json::json!({ "error": error.to_string() }),
        )
    }
}

impl From<HandlerResponse> for HttpResponse {
    fn from(response: HandlerResponse) -> Self {
        let status =
            StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = HttpResponse::build(status);
        for (name, value) in &response.headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                builder.content_type(value.as_str());
            } else {
                builder.insert_header((name.as_str(), value.as_str()));
            }
        }
        builder.body(response.body)
    }
}
