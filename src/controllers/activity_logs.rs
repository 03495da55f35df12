//! Activity log controller
//!
//! Audit trail of user actions. Entries are append-only: create and read
//! are supported, update and delete are refused.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::parse_body;
use crate::http::{build_message_response, json_response};
use crate::store::{now_rfc3339, ActivityLog, Store};

#[derive(Debug, Deserialize)]
struct NewActivityLog {
    username: String,
    action: String,
    #[serde(default)]
    details: String,
}

pub struct ActivityLogController {
    store: Arc<Store>,
}

impl ActivityLogController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let records = self.store.activity_logs.list().await;
        json_response(StatusCode::OK, &serde_json::json!({ "records": records }))
    }

    pub async fn create(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: NewActivityLog = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let id = self.store.activity_logs.allocate_id();
        self.store
            .activity_logs
            .insert(
                id,
                ActivityLog {
                    id,
                    username: payload.username,
                    action: payload.action,
                    details: payload.details,
                    created_at: now_rfc3339(),
                },
            )
            .await;

        json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "Activity logged", "id": id }),
        )
    }

    pub fn update(&self) -> Response<Full<Bytes>> {
        append_only_response()
    }

    pub fn delete(&self) -> Response<Full<Bytes>> {
        append_only_response()
    }
}

fn append_only_response() -> Response<Full<Bytes>> {
    build_message_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Activity logs are append-only",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let c = ActivityLogController::new(Arc::new(Store::new()));
        let body = Bytes::from_static(
            br#"{"username":"admin","action":"product.create","details":"sku PJ-100"}"#,
        );
        assert_eq!(c.create(&body).await.status(), StatusCode::CREATED);

        let json = body_json(c.read().await).await;
        assert_eq!(json["records"][0]["action"], "product.create");
        assert!(!json["records"][0]["created_at"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_are_refused() {
        let c = ActivityLogController::new(Arc::new(Store::new()));
        assert_eq!(c.update().status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(c.delete().status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(c.update()).await["message"],
            "Activity logs are append-only"
        );
    }
}
