use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejection is reported through `AppError`, so malformed or
/// mistyped bodies get the same `{"error": {...}}` envelope as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
