//! In-memory store module
//!
//! Shared state behind the resource controllers. Each resource gets its own
//! table; nothing survives process restart (durable persistence is handled
//! outside this service).

mod records;
mod table;

pub use records::{
    now_rfc3339, ActivityLog, Product, StockLevel, StockTransaction, TransactionType, User,
    Warehouse,
};
pub use table::Table;

/// One table per API resource.
///
/// Controllers are constructed fresh per request and borrow the store
/// through an `Arc`; all mutation goes through the per-table locks.
pub struct Store {
    pub users: Table<User>,
    pub products: Table<Product>,
    pub stock_levels: Table<StockLevel>,
    pub warehouses: Table<Warehouse>,
    pub transactions: Table<StockTransaction>,
    pub activity_logs: Table<ActivityLog>,
}

impl Store {
    /// Create a store seeded with the demo administrator account
    pub fn new() -> Self {
        let store = Self {
            users: Table::new(),
            products: Table::new(),
            stock_levels: Table::new(),
            warehouses: Table::new(),
            transactions: Table::new(),
            activity_logs: Table::new(),
        };

        let id = store.users.allocate_id();
        store.users.seed(
            id,
            User {
                id,
                username: "admin".to_string(),
                password: "supervault".to_string(),
                full_name: "SuperVault Administrator".to_string(),
                role: "admin".to_string(),
            },
        );

        store
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
