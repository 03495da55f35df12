//! HTTP protocol layer module
//!
//! Response builders and the API-wide header set, decoupled from routing
//! and controller logic.

pub mod headers;
pub mod response;

pub use headers::{api_header_set, apply_api_headers};
pub use response::{
    build_api_info_response, build_message_response, build_method_not_allowed_response,
    build_not_found_response, build_preflight_response, json_response,
};
