//! Inventory (stock level) controller
//!
//! Stock levels are per-product, per-warehouse rows. Referential checks
//! against the product and warehouse tables are deliberately out of scope.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::{parse_body, record_not_found, DeleteRequest};
use crate::http::json_response;
use crate::store::{StockLevel, Store};

#[derive(Debug, Deserialize)]
struct NewStockLevel {
    product_id: u64,
    warehouse_id: u64,
    quantity: i64,
}

pub struct InventoryController {
    store: Arc<Store>,
}

impl InventoryController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let records = self.store.stock_levels.list().await;
        json_response(StatusCode::OK, &serde_json::json!({ "records": records }))
    }

    pub async fn create(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: NewStockLevel = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let id = self.store.stock_levels.allocate_id();
        self.store
            .stock_levels
            .insert(
                id,
                StockLevel {
                    id,
                    product_id: payload.product_id,
                    warehouse_id: payload.warehouse_id,
                    quantity: payload.quantity,
                },
            )
            .await;

        json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "Stock level created", "id": id }),
        )
    }

    pub async fn update(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let level: StockLevel = match parse_body(body) {
            Ok(l) => l,
            Err(response) => return response,
        };

        if self.store.stock_levels.replace(level.id, level).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Stock level updated" }),
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

        if self.store.stock_levels.remove(request.id).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Stock level deleted" }),
            )
        } else {
            record_not_found()
        }
    }
}
