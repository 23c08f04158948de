//! Caller authentication module.
//!
//! The service sits behind an authenticating gateway: the gateway proves
//! itself with a pre-shared key (constant-time compared to mitigate timing
//! attacks) and forwards the authenticated caller's identity in a header.
//! Every lifecycle operation starts from that identity.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header name for the gateway pre-shared key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header name for the authenticated caller identity.
pub const CALLER_ID_HEADER: &str = "x-caller-id";

/// Identity of the authenticated caller, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct CallerId(pub String);

/// Authentication layer: verifies the gateway PSK (when configured) and
/// extracts the caller identity for downstream handlers.
pub async fn auth_layer(
    expected_psk: Option<String>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = expected_psk {
        if !psk_matches(&request, &expected) {
            return AppError::Unauthenticated("Missing or invalid API key".to_string())
                .into_response();
        }
    }

    let caller = request
        .headers()
        .get(CALLER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    match caller {
        Some(caller_id) => {
            request.extensions_mut().insert(CallerId(caller_id));
            next.run(request).await
        }
        None => AppError::Unauthenticated("Missing caller identity".to_string()).into_response(),
    }
}

/// Check the request's PSK against the expected value. Accepts the dedicated
/// header or an Authorization bearer token.
fn psk_matches(request: &Request, expected: &str) -> bool {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        });

    match provided {
        Some(provided_key) => constant_time_compare(provided_key, expected),
        None => false,
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-key"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }
}
