//! Resource controllers module
//!
//! One controller per API resource, constructed fresh for every request
//! around a shared store handle. Dispatch is a tagged enum rather than
//! dynamic instantiation: the router resolves a `Resource`, the factory
//! builds the matching variant, and `invoke` runs the selected capability.
//!
//! Each controller owns its entire response (status and body); the
//! dispatcher never inspects or rewrites controller output.

mod activity_logs;
mod analytics;
mod auth;
mod inventory;
mod products;
mod transactions;
mod warehouses;

pub use activity_logs::ActivityLogController;
pub use analytics::AnalyticsController;
pub use auth::AuthController;
pub use inventory::InventoryController;
pub use products::ProductController;
pub use transactions::TransactionController;
pub use warehouses::WarehouseController;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

use crate::http::build_message_response;
use crate::routing::{Capability, Resource};
use crate::store::Store;

/// Delete payloads carry only the record id
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: u64,
}

/// Controller instance for one request
pub enum ResourceController {
    Auth(AuthController),
    Products(ProductController),
    Inventory(InventoryController),
    Warehouses(WarehouseController),
    Transactions(TransactionController),
    ActivityLogs(ActivityLogController),
    Analytics(AnalyticsController),
}

impl ResourceController {
    /// Build the controller for a resolved resource
    pub fn for_resource(resource: Resource, store: Arc<Store>) -> Self {
        match resource {
            Resource::Auth => Self::Auth(AuthController::new(store)),
            Resource::Products => Self::Products(ProductController::new(store)),
            Resource::Inventory => Self::Inventory(InventoryController::new(store)),
            Resource::Warehouses => Self::Warehouses(WarehouseController::new(store)),
            Resource::Transactions => Self::Transactions(TransactionController::new(store)),
            Resource::ActivityLogs => Self::ActivityLogs(ActivityLogController::new(store)),
            Resource::Analytics => Self::Analytics(AnalyticsController::new(store)),
        }
    }

    /// Invoke the selected capability with the collected request body.
    ///
    /// Routing is permissive about `login` (it pairs for every resource);
    /// controllers without a login operation answer for themselves here.
    pub async fn invoke(&self, capability: Capability, body: &Bytes) -> Response<Full<Bytes>> {
        match (self, capability) {
            (Self::Auth(c), Capability::Read) => c.read().await,
            (Self::Auth(c), Capability::Create) => c.create(body).await,
            (Self::Auth(c), Capability::Login) => c.login(body).await,
            (Self::Auth(c), Capability::Update) => c.update(body).await,
            (Self::Auth(c), Capability::Delete) => c.delete(body).await,

            (Self::Products(c), Capability::Read) => c.read().await,
            (Self::Products(c), Capability::Create) => c.create(body).await,
            (Self::Products(c), Capability::Update) => c.update(body).await,
            (Self::Products(c), Capability::Delete) => c.delete(body).await,

            (Self::Inventory(c), Capability::Read) => c.read().await,
            (Self::Inventory(c), Capability::Create) => c.create(body).await,
            (Self::Inventory(c), Capability::Update) => c.update(body).await,
            (Self::Inventory(c), Capability::Delete) => c.delete(body).await,

            (Self::Warehouses(c), Capability::Read) => c.read().await,
            (Self::Warehouses(c), Capability::Create) => c.create(body).await,
            (Self::Warehouses(c), Capability::Update) => c.update(body).await,
            (Self::Warehouses(c), Capability::Delete) => c.delete(body).await,

            (Self::Transactions(c), Capability::Read) => c.read().await,
            (Self::Transactions(c), Capability::Create) => c.create(body).await,
            (Self::Transactions(c), Capability::Update) => c.update(body).await,
            (Self::Transactions(c), Capability::Delete) => c.delete(body).await,

            (Self::ActivityLogs(c), Capability::Read) => c.read().await,
            (Self::ActivityLogs(c), Capability::Create) => c.create(body).await,
            (Self::ActivityLogs(c), Capability::Update) => c.update(),
            (Self::ActivityLogs(c), Capability::Delete) => c.delete(),

            (Self::Analytics(c), Capability::Read) => c.read().await,
            (Self::Analytics(c), Capability::Create) => c.create(),
            (Self::Analytics(c), Capability::Update) => c.update(),
            (Self::Analytics(c), Capability::Delete) => c.delete(),

            (_, Capability::Login) => login_not_supported(),
        }
    }
}

/// Response for `login` on a resource without a login operation
fn login_not_supported() -> Response<Full<Bytes>> {
    build_message_response(StatusCode::NOT_IMPLEMENTED, "Login not supported")
}

/// Decode a JSON request body, turning decode failures into a 400 response
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, Response<Full<Bytes>>> {
    serde_json::from_slice(body).map_err(|e| {
        build_message_response(StatusCode::BAD_REQUEST, &format!("Invalid JSON: {e}"))
    })
}

/// 404 response for operations on a missing record id
fn record_not_found() -> Response<Full<Bytes>> {
    build_message_response(StatusCode::NOT_FOUND, "Record not found")
}
