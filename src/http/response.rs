//! HTTP response building module
//!
//! Provides builders for the canonical API responses. All bodies are JSON;
//! builder failures are logged and degrade to a plain response instead of
//! panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Static API info document served for paths with fewer than two segments
#[derive(Debug, Serialize)]
struct ApiInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

const API_INFO: ApiInfo = ApiInfo {
    name: "SuperVault API",
    version: "1.0.0",
    description: "API for SuperVault Inventory Management System",
};

/// Build a JSON response from any serializable body
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_fallback_response(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build {status} response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a JSON response with a single `message` field
pub fn build_message_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &serde_json::json!({ "message": message }))
}

/// Build the 200 API info response (default route)
pub fn build_api_info_response() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &API_INFO)
}

/// Build the 404 response for an unknown resource
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    build_message_response(StatusCode::NOT_FOUND, "Resource not found")
}

/// Build the 405 response for an unmatched (method, action) pair
pub fn build_method_not_allowed_response() -> Response<Full<Bytes>> {
    build_message_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Build the preflight response: 200 with an empty body
pub fn build_preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build preflight response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// Last-resort response when serialization itself fails
fn build_fallback_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(r#"{"message":"Internal server error"}"#)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}
