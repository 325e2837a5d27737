//! Base origin extraction from HTTP request headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the request's base origin (`scheme://host`) from its headers.
///
/// The host (including any port) comes from the `Host` header; the scheme
/// from `X-Forwarded-Proto` when a reverse proxy sets it, defaulting to
/// `http`. Used to build absolute short URLs in API responses.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn request_origin(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_origin_simple_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(request_origin(&headers).unwrap(), "http://example.com");
    }

    #[test]
    fn test_origin_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(request_origin(&headers).unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_origin_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        assert_eq!(request_origin(&headers).unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_origin_missing_host_header() {
        let headers = HeaderMap::new();

        let result = request_origin(&headers);
        assert!(result.is_err());
    }

    #[test]
    fn test_origin_invalid_utf8_host() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            let result = request_origin(&headers);
            assert!(result.is_err());
        }
    }
}
