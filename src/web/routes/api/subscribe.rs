use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::web::{
    data::{SubscribeBody, ValidEmail},
    Error, WebResult,
};

pub const SUBSCRIBED_MSG: &str = "Thanks — you're on the list!";

/// Validates the `email` of a `{ "email": string }` body.
///
/// Nothing is stored or forwarded: a valid address simply gets the standard response.
#[tracing::instrument(name = "Subscribing a new email", skip(body))]
pub async fn subscribe(body: Result<Bytes, BytesRejection>) -> WebResult<Json<Value>> {
    let body = body?;
    let SubscribeBody { email } = SubscribeBody::from_slice(&body)?;
    let email = ValidEmail::parse(email)?;

    info!(subscriber_email = %email.as_str(), "subscriber accepted");

    Ok(Json(json!({ "message": SUBSCRIBED_MSG })))
}

/// Every method other than `POST` on the `subscribe` route ends up here.
pub async fn method_not_allowed(method: Method) -> WebResult<StatusCode> {
    Err(Error::MethodNotAllowed(method))
}
