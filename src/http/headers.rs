//! API response header set
//!
//! Every response the server emits carries the same cross-origin and
//! content-type headers. The set is produced by a pure function and applied
//! once at the boundary of request handling, instead of scattered header
//! writes inside individual handlers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

use crate::config::HttpConfig;
use crate::logger;

pub const ALLOWED_METHODS: &str = "POST, GET, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str =
    "Content-Type, Access-Control-Allow-Headers, Authorization, X-Requested-With";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Produce the full header set for API responses.
///
/// Returns owned name/value pairs so the set can be inspected in tests and
/// applied to any response.
pub fn api_header_set(http: &HttpConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Access-Control-Allow-Origin", http.allow_origin.clone()),
        ("Content-Type", JSON_CONTENT_TYPE.to_string()),
        ("Access-Control-Allow-Methods", ALLOWED_METHODS.to_string()),
        ("Access-Control-Max-Age", http.cors_max_age.to_string()),
        ("Access-Control-Allow-Headers", ALLOWED_HEADERS.to_string()),
    ]
}

/// Apply the API header set to a response, overwriting any existing values.
///
/// Invalid configured values are logged and skipped rather than failing the
/// response.
pub fn apply_api_headers(response: &mut Response<Full<Bytes>>, http: &HttpConfig) {
    let headers = response.headers_mut();
    for (name, value) in api_header_set(http) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(n), Ok(v)) => {
                headers.insert(n, v);
            }
            _ => {
                logger::log_error(&format!("Invalid header {name}: {value}"));
            }
        }
    }
}
