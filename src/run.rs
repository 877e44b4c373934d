use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::handler::ContactHandler;
use crate::routes::contact::{contact, invoke};
use crate::routes::health::health_check;

pub fn run(listener: TcpListener, handler: ContactHandler) -> Result<Server, std::io::Error> {
    let handler = web::Data::new(handler);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/contact", web::route().to(contact))
            .route("/invoke", web::post().to(invoke))
            .app_data(handler.clone())
    })
    .listen(listener)?
    .run())
}
