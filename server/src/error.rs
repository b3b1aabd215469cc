//! HTTP-facing errors.
//!
//! # Design
//! Only malformed form values are errors; unknown ids and empty titles are
//! handled by the store as no-ops and render an empty fragment instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_core::TodoError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A form value could not be parsed.
    #[error(transparent)]
    BadInput(#[from] TodoError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "rejected request");
        (status, self.to_string()).into_response()
    }
}
