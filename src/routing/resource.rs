//! Resource and action identifiers
//!
//! Both sets are closed: resolution is exact string match only, with no
//! prefix matching and no case folding.

use std::fmt;

/// A named domain entity group exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Auth,
    Products,
    Inventory,
    Warehouses,
    Transactions,
    ActivityLogs,
    Analytics,
}

impl Resource {
    /// Resolve a path segment to a resource by exact match
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "auth" => Some(Self::Auth),
            "products" => Some(Self::Products),
            "inventory" => Some(Self::Inventory),
            "warehouses" => Some(Self::Warehouses),
            "transactions" => Some(Self::Transactions),
            "activity_logs" => Some(Self::ActivityLogs),
            "analytics" => Some(Self::Analytics),
            _ => None,
        }
    }

    /// Canonical path segment for this resource
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Products => "products",
            Self::Inventory => "inventory",
            Self::Warehouses => "warehouses",
            Self::Transactions => "transactions",
            Self::ActivityLogs => "activity_logs",
            Self::Analytics => "analytics",
        }
    }

    /// All known resources, in route-table order
    pub const ALL: [Self; 7] = [
        Self::Auth,
        Self::Products,
        Self::Inventory,
        Self::Warehouses,
        Self::Transactions,
        Self::ActivityLogs,
        Self::Analytics,
    ];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

/// The verb segment of the path indicating the intended operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Login,
    Update,
    Delete,
}

impl Action {
    /// Resolve a path segment to an action by exact match
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "read" => Some(Self::Read),
            "create" => Some(Self::Create),
            "login" => Some(Self::Login),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_exact_match_only() {
        assert_eq!(Resource::from_segment("products"), Some(Resource::Products));
        assert_eq!(
            Resource::from_segment("activity_logs"),
            Some(Resource::ActivityLogs)
        );
        // No case folding, no prefix matching
        assert_eq!(Resource::from_segment("Products"), None);
        assert_eq!(Resource::from_segment("product"), None);
        assert_eq!(Resource::from_segment("productses"), None);
        assert_eq!(Resource::from_segment(""), None);
    }

    #[test]
    fn test_resource_segment_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_segment(resource.as_segment()), Some(resource));
        }
    }

    #[test]
    fn test_action_exact_match_only() {
        assert_eq!(Action::from_segment("read"), Some(Action::Read));
        assert_eq!(Action::from_segment("login"), Some(Action::Login));
        assert_eq!(Action::from_segment("READ"), None);
        assert_eq!(Action::from_segment("remove"), None);
        assert_eq!(Action::from_segment(""), None);
    }
}
