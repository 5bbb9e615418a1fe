use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::store::StoreError;

use super::types::DataParsingError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
    #[error("path rejection: {0}")]
    Path(#[from] PathRejection),
    #[error("query rejection: {0}")]
    Query(#[from] QueryRejection),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Store(StoreError::ActivityNotFound(_)) => (StatusCode::NOT_FOUND, ActivityNotFound),
            Error::Store(StoreError::AlreadySignedUp { .. }) => {
                (StatusCode::BAD_REQUEST, AlreadySignedUp)
            }
            Error::Store(StoreError::NotSignedUp { .. }) => (StatusCode::BAD_REQUEST, NotSignedUp),
            Error::DataParsing(data_er) => {
                (StatusCode::BAD_REQUEST, InvalidInput(data_er.to_string()))
            }
            Error::Path(rejection) => (
                StatusCode::BAD_REQUEST,
                InvalidInput(rejection.body_text()),
            ),
            Error::Query(rejection) => (
                StatusCode::BAD_REQUEST,
                InvalidInput(rejection.body_text()),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
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

/// The error a client gets to see. Its `Display` is the `detail` of the error body.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Student is already signed up")]
    AlreadySignedUp,
    #[display("Student is not signed up for this activity")]
    NotSignedUp,
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
    #[display("Service Error!")]
    ServiceError,
}
