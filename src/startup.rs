use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use anyhow::Context;

use crate::config::Configuration;
use crate::handler::ContactHandler;
use crate::run::run;
use crate::topic::SnsClient;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                configuration.app.host, configuration.app.port
            )
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting contact relay on address: {}:{}",
            configuration.app.host,
            port
        );

        let sns_client = SnsClient::new(&configuration.topic)?;
        let handler = ContactHandler::new(
            Arc::new(sns_client),
            configuration.topic.topic_arn(),
            configuration.contact.site_name.clone(),
        );

        let address = configuration.app.host.clone();
        let server = run(listener, handler)?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
