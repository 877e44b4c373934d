use crate::helpers::spawn_app;

#[tokio::test]
async fn invoke_wraps_the_handler_response_in_the_platform_shape() {
    let app = spawn_app().await;
    app.expect_publishes(1).await;

    let response = app
        .post_invoke(&serde_json::json!({
            "httpMethod": "POST",
            "body": r#"{"name":"Alice","email":"a@b.com","message":"Hello"}"#,
        }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 200);
    assert_eq!(event_response["headers"]["Content-Type"], "application/json");

    let body: serde_json::Value =
        serde_json::from_str(event_response["body"].as_str().unwrap()).unwrap();
    assert_eq!(
        body["message"],
        "Message sent successfully! Thank you for reaching out."
    );
}

#[tokio::test]
async fn invoke_reports_a_missing_body_as_a_400_event_response() {
    let app = spawn_app().await;
    app.expect_publishes(0).await;

    let response = app
        .post_invoke(&serde_json::json!({ "httpMethod": "POST" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 400);
    assert_eq!(
        event_response["body"],
        r#"{"error":"No request body provided"}"#
    );
}

#[tokio::test]
async fn invoke_acknowledges_preflight_events_regardless_of_body() {
    let app = spawn_app().await;
    app.expect_publishes(0).await;

    let response = app
        .post_invoke(&serde_json::json!({
            "httpMethod": "OPTIONS",
            "body": "{not json",
        }))
        .await;

    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 200);
    assert_eq!(event_response["body"], r#"{"message":"CORS preflight"}"#);
}

#[tokio::test]
async fn invoke_answers_in_the_platform_shape_without_a_content_type() {
    let app = spawn_app().await;
    app.expect_publishes(0).await;

    let response = app.post_invoke_raw(r#"{"httpMethod": "POST"}"#).await;

    assert_eq!(200, response.status().as_u16());
    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 400);
    assert_eq!(
        event_response["body"],
        r#"{"error":"No request body provided"}"#
    );
}

#[tokio::test]
async fn invoke_acknowledges_a_preflight_with_a_non_string_body() {
    let app = spawn_app().await;
    app.expect_publishes(0).await;

    let response = app
        .post_invoke(&serde_json::json!({
            "httpMethod": "OPTIONS",
            "body": { "name": "Alice" },
        }))
        .await;

    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 200);
}

#[tokio::test]
async fn invoke_rejects_a_non_string_body_as_malformed() {
    let app = spawn_app().await;
    app.expect_publishes(0).await;

    let response = app
        .post_invoke(&serde_json::json!({
            "httpMethod": "POST",
            "body": { "name": "Alice", "email": "a@b.com", "message": "Hello" },
        }))
        .await;

    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 400);
    assert_eq!(
        event_response["body"],
        r#"{"error":"Invalid JSON in request body"}"#
    );
}

#[tokio::test]
async fn invoke_rejects_an_event_that_is_not_json() {
    let app = spawn_app().await;
    app.expect_publishes(0).await;

    let response = app.post_invoke_raw("{not an event").await;

    assert_eq!(200, response.status().as_u16());
    let event_response: serde_json::Value = response.json().await.unwrap();
    assert_eq!(event_response["statusCode"], 400);
}
