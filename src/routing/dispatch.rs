//! Route planning
//!
//! Maps (HTTP method, request path) onto a dispatch decision. Planning is a
//! total pure function: routing mismatches come back as plan variants, never
//! as errors, so the caller turns them into responses and returns early.

use hyper::Method;

use super::resource::{Action, Resource};

/// Controller operation selected by the (method, action) table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Read,
    Create,
    Login,
    Update,
    Delete,
}

/// Dispatch decision for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePlan {
    /// Fewer than 2 path segments: serve the static API info document
    ApiInfo,
    /// Resolved resource and capability: invoke the controller
    Invoke {
        resource: Resource,
        capability: Capability,
    },
    /// Resource segment not in the known set
    NotFound,
    /// Known resource but no (method, action) pairing
    MethodNotAllowed,
}

/// Plan the route for a request.
///
/// The path is stripped of leading slashes and split on `'/'`. segment\[0\]
/// names the resource, segment\[1\] the action; anything past index 1 is
/// ignored. An unknown action on a known resource is a method mismatch
/// (405), not a missing resource (404).
pub fn plan_route(method: &Method, path: &str) -> RoutePlan {
    let trimmed = path.trim_start_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    if segments.len() < 2 {
        return RoutePlan::ApiInfo;
    }

    let Some(resource) = Resource::from_segment(segments[0]) else {
        return RoutePlan::NotFound;
    };

    match pair_capability(method, Action::from_segment(segments[1])) {
        Some(capability) => RoutePlan::Invoke {
            resource,
            capability,
        },
        None => RoutePlan::MethodNotAllowed,
    }
}

/// The fixed (method, action) pairing table.
///
/// `login` pairs for any resource; the controller decides whether it
/// supports the operation.
fn pair_capability(method: &Method, action: Option<Action>) -> Option<Capability> {
    match (method, action?) {
        (&Method::GET, Action::Read) => Some(Capability::Read),
        (&Method::POST, Action::Create) => Some(Capability::Create),
        (&Method::POST, Action::Login) => Some(Capability::Login),
        (&Method::PUT, Action::Update) => Some(Capability::Update),
        (&Method::DELETE, Action::Delete) => Some(Capability::Delete),
        _ => None,
    }
}
