//! Product catalog controller

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

use super::{parse_body, record_not_found, DeleteRequest};
use crate::http::json_response;
use crate::store::{Product, Store};

/// Create payload: everything but the id, which the store assigns
#[derive(Debug, Deserialize)]
struct NewProduct {
    name: String,
    sku: String,
    #[serde(default)]
    description: String,
    unit_price: f64,
    #[serde(default)]
    category: String,
}

pub struct ProductController {
    store: Arc<Store>,
}

impl ProductController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let records = self.store.products.list().await;
        json_response(StatusCode::OK, &serde_json::json!({ "records": records }))
    }

    pub async fn create(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: NewProduct = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let id = self.store.products.allocate_id();
        self.store
            .products
            .insert(
                id,
                Product {
                    id,
                    name: payload.name,
                    sku: payload.sku,
                    description: payload.description,
                    unit_price: payload.unit_price,
                    category: payload.category,
                },
            )
            .await;

        json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "Product created", "id": id }),
        )
    }

    pub async fn update(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let product: Product = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        if self.store.products.replace(product.id, product).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Product updated" }),
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

        if self.store.products.remove(request.id).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "Product deleted" }),
            )
        } else {
            record_not_found()
        }
    }
}
