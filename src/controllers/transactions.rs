//! Stock transaction controller
//!
//! Transactions record `in`/`out` stock movements and are stamped with the
//! creation time. Whether a movement is consistent with stock on hand is a
//! business rule outside this service.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::{parse_body, record_not_found, DeleteRequest};
use crate::http::json_response;
use crate::store::{now_rfc3339, StockTransaction, Store, TransactionType};

#[derive(Debug, Deserialize)]
struct NewTransaction {
    product_id: u64,
    warehouse_id: u64,
    transaction_type: TransactionType,
    quantity: i64,
}

/// Update payload keeps the original `created_at`
#[derive(Debug, Deserialize)]
struct TransactionUpdate {
    id: u64,
    product_id: u64,
    warehouse_id: u64,
    transaction_type: TransactionType,
    quantity: i64,
}

pub struct TransactionController {
    store: Arc<Store>,
}

impl TransactionController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let records = self.store.transactions.list().await;
        json_response(StatusCode::OK, &serde_json::json!({ "records": records }))
    }

    pub async fn create(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: NewTransaction = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let id = self.store.transactions.allocate_id();
        self.store
            .transactions
            .insert(
                id,
                StockTransaction {
                    id,
                    product_id: payload.product_id,
                    warehouse_id: payload.warehouse_id,
                    transaction_type: payload.transaction_type,
                    quantity: payload.quantity,
                    created_at: now_rfc3339(),
                },
            )
            .await;

        json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "Transaction created", "id": id }),
        )
    }

    pub async fn update(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: TransactionUpdate = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let Some(existing) = self.store.transactions.get(payload.id).await else {
            return record_not_found();
        };

        let updated = StockTransaction {
            id: payload.id,
            product_id: payload.product_id,
            warehouse_id: payload.warehouse_id,
            transaction_type: payload.transaction_type,
            quantity: payload.quantity,
            created_at: existing.created_at,
        };
        self.store.transactions.replace(payload.id, updated).await;

        json_response(
            StatusCode::OK,
            &serde_json::json!({ "message": "Transaction updated" }),
        )
    }

    pub async fn delete(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let request: DeleteRequest = match parse_body(body) {
            Ok(r) => r,
            Err(response) => return response,
        };

        if self.store.transactions.remove(request.id).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Transaction deleted" }),
            )
        } else {
            record_not_found()
        }
    }
}
