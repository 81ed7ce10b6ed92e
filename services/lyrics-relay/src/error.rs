// Relay errors and the status each one is reported with
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Artist and song parameters are required")]
    MissingParameters,

    #[error("Lyrics not found")]
    NotFound,

    /// Transport failure talking to the provider (DNS, connect, body read).
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),

    /// Provider answered with success but the body was not JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingParameters => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::Upstream(_) | RelayError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
