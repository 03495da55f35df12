//! Analytics controller
//!
//! Read-only summaries computed from the live store; nothing is written.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::http::{build_message_response, json_response};
use crate::store::Store;

#[derive(Debug, Serialize)]
struct AnalyticsSummary {
    products: usize,
    warehouses: usize,
    stock_levels: usize,
    transactions: usize,
    activity_logs: usize,
    users: usize,
    /// Sum of quantity over all stock levels
    total_stock: i64,
}

pub struct AnalyticsController {
    store: Arc<Store>,
}

impl AnalyticsController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let total_stock = self
            .store
            .stock_levels
            .list()
            .await
            .iter()
            .map(|level| level.quantity)
            .sum();

        let summary = AnalyticsSummary {
            products: self.store.products.len().await,
            warehouses: self.store.warehouses.len().await,
            stock_levels: self.store.stock_levels.len().await,
            transactions: self.store.transactions.len().await,
            activity_logs: self.store.activity_logs.len().await,
            users: self.store.users.len().await,
            total_stock,
        };

        json_response(StatusCode::OK, &summary)
    }

    pub fn create(&self) -> Response<Full<Bytes>> {
        read_only_response()
    }

    pub fn update(&self) -> Response<Full<Bytes>> {
        read_only_response()
    }

    pub fn delete(&self) -> Response<Full<Bytes>> {
        read_only_response()
    }
}

fn read_only_response() -> Response<Full<Bytes>> {
    build_message_response(StatusCode::METHOD_NOT_ALLOWED, "Analytics is read-only")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Product, StockLevel};
    use http_body_util::BodyExt;

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_summary_counts_and_stock_total() {
        let store = Arc::new(Store::new());
        store
            .products
            .insert(
                1,
                Product {
                    id: 1,
                    name: "Bin".to_string(),
                    sku: "B-1".to_string(),
                    description: String::new(),
                    unit_price: 5.0,
                    category: String::new(),
                },
            )
            .await;
        for (id, quantity) in [(1, 40), (2, 25)] {
            store
                .stock_levels
                .insert(
                    id,
                    StockLevel {
                        id,
                        product_id: 1,
                        warehouse_id: 1,
                        quantity,
                    },
                )
                .await;
        }

        let c = AnalyticsController::new(store);
        let json = body_json(c.read().await).await;
        assert_eq!(json["products"], 1);
        assert_eq!(json["stock_levels"], 2);
        assert_eq!(json["total_stock"], 65);
        // Seeded demo admin
        assert_eq!(json["users"], 1);
    }

    #[tokio::test]
    async fn test_writes_are_refused() {
        let c = AnalyticsController::new(Arc::new(Store::new()));
        assert_eq!(c.create().status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(c.update().status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(c.delete().status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
