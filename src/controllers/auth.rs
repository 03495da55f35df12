//! Auth controller
//!
//! The only controller with a login operation. Accounts live in the store's
//! user table; login hands back an opaque session token. Routes themselves
//! are not guarded by the token, enforcement belongs to a gateway in front
//! of this service.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Deserialize;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use super::{parse_body, record_not_found, DeleteRequest};
use crate::http::{build_message_response, json_response};
use crate::store::{now_rfc3339, Store, User};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct NewUser {
    username: String,
    password: String,
    #[serde(default)]
    full_name: String,
    #[serde(default = "default_role")]
    role: String,
}

#[derive(Debug, Deserialize)]
struct UserUpdate {
    id: u64,
    username: String,
    password: String,
    #[serde(default)]
    full_name: String,
    #[serde(default = "default_role")]
    role: String,
}

fn default_role() -> String {
    "member".to_string()
}

pub struct AuthController {
    store: Arc<Store>,
}

impl AuthController {
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn login(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let request: LoginRequest = match parse_body(body) {
            Ok(r) => r,
            Err(response) => return response,
        };

        let user = self
            .store
            .users
            .list()
            .await
            .into_iter()
            .find(|u| u.username == request.username && u.password == request.password);

        match user {
            Some(user) => json_response(
                StatusCode::OK,
                &serde_json::json!({
                    "message": "Login successful",
                    "token": session_token(&user.username),
                    "user": user,
                }),
            ),
            None => build_message_response(StatusCode::UNAUTHORIZED, "Invalid credentials"),
        }
    }

    pub async fn read(&self) -> Response<Full<Bytes>> {
        let records = self.store.users.list().await;
        json_response(StatusCode::OK, &serde_json::json!({ "records": records }))
    }

    pub async fn create(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: NewUser = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let taken = self
            .store
            .users
            .list()
            .await
            .iter()
            .any(|u| u.username == payload.username);
        if taken {
            return build_message_response(StatusCode::CONFLICT, "Username already exists");
        }

        let id = self.store.users.allocate_id();
        self.store
            .users
            .insert(
                id,
                User {
                    id,
                    username: payload.username,
                    password: payload.password,
                    full_name: payload.full_name,
                    role: payload.role,
                },
            )
            .await;

        json_response(
            StatusCode::CREATED,
            &serde_json::json!({ "message": "User created", "id": id }),
        )
    }

    pub async fn update(&self, body: &Bytes) -> Response<Full<Bytes>> {
        let payload: UserUpdate = match parse_body(body) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let user = User {
            id: payload.id,
            username: payload.username,
            password: payload.password,
            full_name: payload.full_name,
            role: payload.role,
        };

        if self.store.users.replace(payload.id, user).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "User updated" }),
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

        if self.store.users.remove(request.id).await {
            json_response(
                StatusCode::OK,
                &serde_json::json!({ "message": "User deleted" }),
            )
        } else {
            record_not_found()
        }
    }
}

/// Opaque demo session token: hash of username and issue time.
///
/// Not a credential the router verifies; it exists so login has a realistic
/// response shape.
fn session_token(username: &str) -> String {
    let mut hasher = DefaultHasher::new();
    username.hash(&mut hasher);
    now_rfc3339().hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn controller() -> AuthController {
        AuthController::new(Arc::new(Store::new()))
    }

    #[tokio::test]
    async fn test_login_with_seeded_admin() {
        let c = controller();
        let body = Bytes::from_static(br#"{"username":"admin","password":"supervault"}"#);
        let response = c.login(&body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Login successful");
        assert!(!json["token"].as_str().unwrap().is_empty());
        // Password is never serialized
        assert!(json["user"].get("password").is_none());
        assert_eq!(json["user"]["username"], "admin");
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let c = controller();
        let body = Bytes::from_static(br#"{"username":"admin","password":"nope"}"#);
        let response = c.login(&body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let c = controller();
        let body = Bytes::from_static(br#"{"username":"admin","password":"x"}"#);
        let response = c.create(&body).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let c = controller();
        let body = Bytes::from_static(
            br#"{"username":"clerk","password":"pw","full_name":"Stock Clerk"}"#,
        );
        assert_eq!(c.create(&body).await.status(), StatusCode::CREATED);

        let login = Bytes::from_static(br#"{"username":"clerk","password":"pw"}"#);
        assert_eq!(c.login(&login).await.status(), StatusCode::OK);

        let json = body_json(c.read().await).await;
        let records = json["records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["role"], "member");
    }
}
