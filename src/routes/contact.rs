//! HTTP adapters in front of [`ContactHandler`].

use actix_web::{web, HttpRequest, HttpResponse};

use crate::handler::{ContactError, ContactHandler, InboundEvent};

/// Serves the form directly: the HTTP request itself is the event.
pub async fn contact(
    request: HttpRequest,
    body: web::Bytes,
    handler: web::Data<ContactHandler>,
) -> HttpResponse {
    let response = match InboundEvent::from_http(request.method().as_str(), &body) {
        Ok(event) => handler.handle(event).await,
        Err(e) => handler.reject(e),
    };

    response.into()
}

/// Accepts a platform event document and returns the platform response document.
///
/// The document is read by hand so that every event, well formed or not,
/// gets an answer in the platform shape.
pub async fn invoke(body: web::Bytes, handler: web::Data<ContactHandler>) -> HttpResponse {
    let event = serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(ContactError::MalformedJson)
        .and_then(|document| InboundEvent::try_from(&document));

    let response = match event {
        Ok(event) => handler.handle(event).await,
        Err(e) => handler.reject(e),
    };

    HttpResponse::Ok().json(response)
}
