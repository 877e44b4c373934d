use std::path::Path;

use secrecy::Secret;
use serde_aux::prelude::deserialize_number_from_string;

use crate::domain::topic_arn::TopicArn;
use crate::topic::signing::Credentials;

/// Topic identifier used when nothing injects a real one at deploy time.
pub const TOPIC_ARN_PLACEHOLDER: &str = "${sns_topic_arn}";

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct TopicSettings {
    pub topic_arn: String,
    pub region: String,
    pub base_url: Option<String>,
    pub access_key_id: String,
    pub secret_access_key: Secret<String>,
    pub session_token: Option<Secret<String>>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl TopicSettings {
    pub fn topic_arn(&self) -> TopicArn {
        TopicArn::new(self.topic_arn.clone())
    }

    /// Regional SNS endpoint unless an explicit base url is configured.
    pub fn endpoint(&self) -> String {
        match &self.base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("https://sns.{}.amazonaws.com", self.region),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            session_token: self.session_token.clone(),
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    pub site_name: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct Configuration {
    pub app: AppConfig,
    pub topic: TopicSettings,
    pub contact: ContactSettings,
}

/// Platform variables that win over anything read from files or `APP_*`.
const PLATFORM_OVERRIDES: [(&str, &str); 5] = [
    ("SNS_TOPIC_ARN", "topic.topic_arn"),
    ("AWS_REGION", "topic.region"),
    ("AWS_ACCESS_KEY_ID", "topic.access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "topic.secret_access_key"),
    ("AWS_SESSION_TOKEN", "topic.session_token"),
];

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let mut settings = file_settings(&base_path.join("configuration"), &environment)?;

    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    for (variable, key) in PLATFORM_OVERRIDES {
        if let Ok(value) = std::env::var(variable) {
            if !value.is_empty() {
                settings.set(key, value)?;
            }
        }
    }

    settings.try_into()
}

/// Defaults, then `base`, then the file named after `environment`.
///
/// Only `local` ships credentials; every other environment must get them
/// from the platform or fail to load.
fn file_settings(
    configuration_directory: &Path,
    environment: &Environment,
) -> Result<config::Config, config::ConfigError> {
    let mut settings = config::Config::default();

    settings.set_default("topic.topic_arn", TOPIC_ARN_PLACEHOLDER)?;
    settings.set_default("contact.site_name", "www.terracloud.fr")?;

    // Read in default configuration
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    // Read in layer environment specific file.
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    Ok(settings)
}
