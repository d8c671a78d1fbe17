use axum::{
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::data::DataParsingError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),
    #[error("failed to read the request body: {0}")]
    BodyRejected(#[from] BytesRejection),

    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),

    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, MethodNotAllowed),
            Error::BodyRejected(rejection) => (rejection.status(), UnreadableBody),
            Error::DataParsing(DataParsingError::InvalidJson(_)) => {
                (StatusCode::BAD_REQUEST, InvalidJson)
            }
            Error::DataParsing(DataParsingError::EmailInvalid) => {
                (StatusCode::BAD_REQUEST, InvalidEmail)
            }
            Error::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The errors a client gets to see, their `Display` is the `message` of the response body.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Method not allowed")]
    MethodNotAllowed,
    #[display("Invalid JSON")]
    InvalidJson,
    #[display("Please provide a valid email address.")]
    InvalidEmail,
    #[display("Could not read the request body.")]
    UnreadableBody,
    #[display("Service Error!")]
    ServiceError,
}
