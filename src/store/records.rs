//! Record types for the store tables
//!
//! All records are plain serde values; timestamps are RFC 3339 strings
//! produced with chrono at write time.

use serde::{Deserialize, Serialize};

/// API user account.
///
/// The password never leaves the server: it is skipped on serialization, so
/// `auth/read` listings only expose public fields.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub unit_price: f64,
    pub category: String,
}

/// Stock on hand for one product in one warehouse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: u64,
    pub product_id: u64,
    pub warehouse_id: u64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub capacity: u64,
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    In,
    Out,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockTransaction {
    pub id: u64,
    pub product_id: u64,
    pub warehouse_id: u64,
    pub transaction_type: TransactionType,
    pub quantity: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLog {
    pub id: u64,
    pub username: String,
    pub action: String,
    pub details: String,
    pub created_at: String,
}

/// Current timestamp in RFC 3339, used for `created_at` fields
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
