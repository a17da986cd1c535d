//! Trusted-gateway identity middleware.
//!
//! Authentication itself lives upstream: the gateway validates credentials
//! and forwards the caller's user id in the `X-User-Id` header. This
//! middleware only requires the header, parses it, and injects the identity
//! into request extensions for handlers to consume.

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::error::AppError;

/// Authenticated caller identity, as asserted by the upstream gateway.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Requires a valid `X-User-Id` header and exposes it as [`AuthUser`].
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or not an integer.
pub async fn layer(mut req: Request, next: Next) -> Result<Response, AppError> {
    let user_id = req
        .headers()
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "X-User-Id header is missing or invalid" }),
            )
        })?;

    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}
