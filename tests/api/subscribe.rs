use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::json;

use crate::helpers::{assert_json_content_type, response_message, TestApp};

const SUBSCRIBED_MSG: &str = "Thanks — you're on the list!";
const INVALID_EMAIL_MSG: &str = "Please provide a valid email address.";

#[tokio::test]
async fn api_subscribe_valid_email_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_subscribe(&json!({ "email": "a@b.co" })).await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );
    assert_json_content_type(&res);
    assert_eq!(response_message(res).await?, SUBSCRIBED_MSG);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_email_is_trimmed_and_case_insensitive() -> Result<()> {
    let app = TestApp::spawn().await?;

    for email in ["  USER@Example.COM ", "\tLe.Guin@Earthsea.ORG\n", "JOHN.DOE@EXAMPLE.COM"] {
        let res = app.post_subscribe(&json!({ "email": email })).await?;

        assert_eq!(res.status(), StatusCode::OK, "for email: '{email}'");
        assert_eq!(response_message(res).await?, SUBSCRIBED_MSG);
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_ignores_extra_fields() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_subscribe(&json!({ "name": "Ursula", "email": "le_guin@gmail.com" }))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_returns_400_for_invalid_emails() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({ "email": "not-an-email" }), "No @"),
        (json!({ "email": "" }), "Empty email"),
        (json!({ "email": "   " }), "Whitespace email"),
        (json!({ "email": "@domain.com" }), "Missing local part"),
        (json!({ "email": "ursula@domain" }), "No dot in domain"),
        (json!({ "email": "urs ula@domain.com" }), "Inner whitespace"),
        (json!({ "email": "a@@b.co" }), "Double @"),
        (json!({ "email": null }), "Null email"),
        (json!({ "email": 42 }), "Number email"),
        (json!({ "name": "John Doe" }), "Missing email"),
        (json!({}), "Empty json"),
        (json!([]), "Array body"),
    ];

    for (body, description) in cases {
        let res = app.post_subscribe(&body).await?;

        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "The API did not return a 400 BAD REQUEST the payload was {description}."
        );
        assert_json_content_type(&res);
        assert_eq!(response_message(res).await?, INVALID_EMAIL_MSG);
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_returns_400_for_malformed_json() -> Result<()> {
    let app = TestApp::spawn().await?;

    for body in ["{bad json", "email=a@b.co", r#"{"email": "a@b.co""#, "   "] {
        let res = app.post_subscribe_raw(body).await?;

        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "Wrong response for body: '{body}'"
        );
        assert_json_content_type(&res);
        assert_eq!(response_message(res).await?, "Invalid JSON");
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_empty_body_is_a_validation_error() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_subscribe_raw("").await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_message(res).await?, INVALID_EMAIL_MSG);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_rejects_other_methods_with_405() -> Result<()> {
    let app = TestApp::spawn().await?;

    for method in [Method::GET, Method::PUT, Method::PATCH, Method::DELETE] {
        let res = app.request_subscribe(method.clone()).await?;

        assert_eq!(
            res.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "Wrong response for method: {method}"
        );
        assert_json_content_type(&res);
        assert_eq!(response_message(res).await?, "Method not allowed");
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_get_is_405_even_with_a_valid_body() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(app.url("/api/subscribe"))
        .json(&json!({ "email": "a@b.co" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
