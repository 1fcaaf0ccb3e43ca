//! HTTP response helpers
//!
//! Pages are either a complete document or a bare status code. Not-found
//! outcomes carry no body.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::errors::AppError;
use crate::render::chrome::CONTENT_TYPE;

/// A finished page document
pub fn html(body: String) -> Response {
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    match &error {
        AppError::NotFound { resource, id } => {
            warn!("{} {} not found", resource, id);
            StatusCode::NOT_FOUND.into_response()
        }
        AppError::Guide(_) | AppError::Configuration { .. } => {
            error!("Request failed: {}", error);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}
