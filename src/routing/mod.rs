//! Routing module
//!
//! Pure dispatch logic for the SuperVault API:
//! - Resource and action identifiers parsed from path segments
//! - (HTTP method, action) pairing onto controller capabilities
//! - Route planning as a total function with no I/O

mod dispatch;
mod resource;

pub use dispatch::{plan_route, Capability, RoutePlan};
pub use resource::{Action, Resource};
