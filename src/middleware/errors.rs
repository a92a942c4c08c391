// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fallback error handling for failures that escape the handlers.
//!
//! Handler errors are already turned into responses by
//! [`AppError`](crate::error::AppError). What remains is a panicking
//! handler, a request for a route that does not exist, and a method the
//! route does not support; all get the same JSON error body.

use crate::error::{internal_error_response, AppError};
use axum::response::Response;
use std::any::Any;

/// Convert a handler panic into a 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(panic = %message, "Handler panicked");
    internal_error_response(message)
}

/// Router fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Router fallback for unknown paths.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
