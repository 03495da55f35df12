//! Request dispatch
//!
//! One request in, exactly one response out. Routing mismatches are
//! responses, not errors: nothing at this layer panics or exits, and the
//! handler keeps no state between requests.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::controllers::ResourceController;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use crate::routing::{plan_route, RoutePlan};
use http_body_util::Full;

/// Main entry point for HTTP request handling.
///
/// Generic over the request body so tests can drive it with in-memory
/// bodies; the server feeds it `hyper::body::Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: String,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut entry = AccessLogEntry::new(remote_addr, method.to_string(), path.clone());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let mut response = dispatch(req, &method, &path, &state).await;

    // Boundary concern: every response carries the API header set,
    // preflight and errors included.
    http::apply_api_headers(&mut response, &state.config.http);

    if state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed)
    {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Produce the response for one request, without boundary headers
async fn dispatch<B>(
    req: Request<B>,
    method: &Method,
    path: &str,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    // Preflight short-circuits before any routing logic
    if method == Method::OPTIONS {
        return http::build_preflight_response();
    }

    match plan_route(method, path) {
        RoutePlan::ApiInfo => http::build_api_info_response(),
        RoutePlan::NotFound => http::build_not_found_response(),
        RoutePlan::MethodNotAllowed => http::build_method_not_allowed_response(),
        RoutePlan::Invoke {
            resource,
            capability,
        } => {
            let body = match req.into_body().collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(e) => {
                    logger::log_error(&format!("Failed to read request body: {e}"));
                    return http::build_message_response(
                        StatusCode::BAD_REQUEST,
                        "Failed to read request body",
                    );
                }
            };

            // Controllers are constructed fresh per request around the
            // shared store handle.
            let controller = ResourceController::for_resource(resource, Arc::clone(&state.store));
            controller.invoke(capability, &body).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> Arc<AppState> {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        Arc::new(AppState::new(&cfg))
    }

    fn request(method: Method, path: &str, body: &'static [u8]) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::from_static(body)))
            .unwrap()
    }

    async fn send(
        state: &Arc<AppState>,
        method: Method,
        path: &str,
        body: &'static [u8],
    ) -> Response<Full<Bytes>> {
        handle_request(request(method, path, body), Arc::clone(state), "test".to_string())
            .await
            .unwrap()
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_api_headers(response: &Response<Full<Bytes>>) {
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            response.headers()["Content-Type"],
            "application/json; charset=UTF-8"
        );
        assert_eq!(
            response.headers()["Access-Control-Allow-Methods"],
            "POST, GET, PUT, DELETE, OPTIONS"
        );
        assert_eq!(response.headers()["Access-Control-Max-Age"], "3600");
        assert_eq!(
            response.headers()["Access-Control-Allow-Headers"],
            "Content-Type, Access-Control-Allow-Headers, Authorization, X-Requested-With"
        );
    }

    #[tokio::test]
    async fn test_options_is_200_empty_regardless_of_path() {
        let state = test_state();
        for path in ["/", "/products/read", "/bogus/whatever"] {
            let response = send(&state, Method::OPTIONS, path, b"").await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_api_headers(&response);
            assert!(body_string(response).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_root_serves_api_info() {
        let state = test_state();
        let response = send(&state, Method::GET, "/", b"").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_api_headers(&response);
        assert_eq!(
            body_string(response).await,
            r#"{"name":"SuperVault API","version":"1.0.0","description":"API for SuperVault Inventory Management System"}"#
        );
    }

    #[tokio::test]
    async fn test_single_segment_serves_api_info() {
        let state = test_state();
        let response = send(&state, Method::GET, "/products", b"").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("SuperVault API"));
    }

    #[tokio::test]
    async fn test_unknown_resource_is_404() {
        let state = test_state();
        let response = send(&state, Method::GET, "/bogus/read", b"").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_api_headers(&response);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Resource not found"}"#
        );
    }

    #[tokio::test]
    async fn test_patch_never_matches() {
        let state = test_state();
        let response = send(&state, Method::PATCH, "/products/update", b"").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_api_headers(&response);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Method not allowed"}"#
        );
    }

    #[tokio::test]
    async fn test_products_read_delegates_to_controller() {
        let state = test_state();
        let response = send(&state, Method::GET, "/products/read", b"").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_api_headers(&response);
        assert_eq!(body_string(response).await, r#"{"records":[]}"#);
    }

    #[tokio::test]
    async fn test_auth_login_delegates_to_controller() {
        let state = test_state();
        let response = send(
            &state,
            Method::POST,
            "/auth/login",
            br#"{"username":"admin","password":"supervault"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Login successful"));
    }

    #[tokio::test]
    async fn test_login_on_other_resource_reaches_controller() {
        let state = test_state();
        let response = send(&state, Method::POST, "/warehouses/login", b"{}").await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Login not supported"}"#
        );
    }

    #[tokio::test]
    async fn test_warehouse_delete_round_trip() {
        let state = test_state();
        let response = send(
            &state,
            Method::POST,
            "/warehouses/create",
            br#"{"name":"North DC"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(&state, Method::DELETE, "/warehouses/delete", br#"{"id":1}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Warehouse deleted"));
    }

    #[tokio::test]
    async fn test_state_is_shared_across_requests() {
        let state = test_state();
        send(
            &state,
            Method::POST,
            "/products/create",
            br#"{"name":"Bin","sku":"B-1","unit_price":5.0}"#,
        )
        .await;

        let response = send(&state, Method::GET, "/analytics/read", b"").await;
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["products"], 1);
    }
}
