use std::collections::HashMap;

use once_cell::sync::Lazy;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use contact_relay::config::get_configuration;
use contact_relay::startup::AppServer;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

pub const TOPIC_ARN: &str = "arn:aws:sns:eu-west-3:123456789012:contact-form";

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber_name = "test".to_string();
    let default_filter_level = "debug".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        ))
        .expect("Failed to initialise telemetry");
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        ))
        .expect("Failed to initialise telemetry");
    }
});

pub struct TestApp {
    pub addr: String,
    pub sns_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/contact", &self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn options_contact(&self) -> reqwest::Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, &format!("{}/contact", &self.addr))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_invoke(&self, event: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/invoke", &self.addr))
            .json(event)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sends `body` as is, without any content type.
    pub async fn post_invoke_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/invoke", &self.addr))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Makes the fake SNS endpoint accept exactly `times` publish calls.
    pub async fn expect_publishes(&self, times: u64) {
        Mock::given(path("/"))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "PublishResponse": {
                    "PublishResult": { "MessageId": "00000000-0000-0000-0000-000000000000" }
                }
            })))
            .expect(times)
            .mount(&self.sns_server)
            .await;
    }

    /// Decoded form fields of every request the fake SNS endpoint received.
    pub async fn published_forms(&self) -> Vec<HashMap<String, String>> {
        self.sns_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| {
                String::from_utf8_lossy(&request.body)
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .map(|(key, value)| {
                        (
                            key.to_string(),
                            urlencoding::decode(value).unwrap().into_owned(),
                        )
                    })
                    .collect()
            })
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let sns_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("should load configuration");
        c.app.port = 0;
        c.topic.base_url = Some(sns_server.uri());
        c.topic.topic_arn = TOPIC_ARN.into();
        c.topic.session_token = None;
        c.topic.timeout_milliseconds = 500;
        c
    };

    let server = AppServer::build(configuration)
        .await
        .expect("should have created server");

    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    TestApp {
        addr,
        sns_server,
        api_client: reqwest::Client::new(),
    }
}

pub async fn error_of(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("body should be json");
    body["error"].as_str().unwrap_or_default().to_string()
}
