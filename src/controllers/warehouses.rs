//! Warehouse controller

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::{parse_body, record_not_found, DeleteRequest};
use crate::http::json_response;
use crate::store::{Store, Warehouse};

#[derive(Debug, Deserialize)]
struct NewWarehouse {
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    capacity: u64,
}

pub struct WarehouseController {
    store: Arc<Store>,
}

impl WarehouseController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let records = self.store.warehouses.list().await;
        json_response(StatusCode::OK, &serde_json::json!({ "records": records }))
    }

    pub async fn create(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: NewWarehouse = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let id = self.store.warehouses.allocate_id();
        self.store
            .warehouses
            .insert(
                id,
                Warehouse {
                    id,
                    name: payload.name,
                    location: payload.location,
                    capacity: payload.capacity,
                },
            )
            .await;

        json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "Warehouse created", "id": id }),
        )
    }

    pub async fn update(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let warehouse: Warehouse = match parse_body(body) {
            Ok(w) => w,
            Err(response) => return response,
        };

        if self.store.warehouses.replace(warehouse.id, warehouse).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Warehouse updated" }),
            )
        } else {
            record_not_found()
        }
    }

    pub async fn delete(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let request: DeleteRequest = match parse_body(body) {
            Ok(r) => r,
            Err(response) => return response,
        };

        if self.store.warehouses.remove(request.id).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Warehouse deleted" }),
            )
        } else {
            record_not_found()
        }
    }
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
    async fn test_crud_round_trip() {
        let c = WarehouseController::new(Arc::new(Store::new()));

        let body =
            Bytes::from_static(br#"{"name":"North DC","location":"Oslo","capacity":12000}"#);
        let response = c.create(&body).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let update = Bytes::from_static(
            br#"{"id":1,"name":"North DC","location":"Bergen","capacity":12000}"#,
        );
        assert_eq!(c.update(&update).await.status(), StatusCode::OK);

        let json = body_json(c.read().await).await;
        assert_eq!(json["records"][0]["location"], "Bergen");

        let response = c.delete(&Bytes::from_static(br#"{"id":1}"#)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(c.read().await).await;
        assert!(json["records"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_404() {
        let c = WarehouseController::new(Arc::new(Store::new()));
        let response = c.delete(&Bytes::from_static(br#"{"id":7}"#)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
