//! Handler tests for the users domain
//!
//! The session middleware is replaced by an `Extension` layer carrying the
//! principal, so these tests cover only the account router:
//! - Response serialization
//! - HTTP status codes
//! - Error bodies

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Extension, Router};
use axum_helpers::Principal;
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt; // For oneshot()
use utoipa::OpenApi;
use uuid::Uuid;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn user(name: &str, role: UserRole) -> User {
    User::new(
        UserId::new(Uuid::now_v7()),
        Username::new(name).unwrap(),
        "$argon2id$v=19$hash".to_string(),
        role,
    )
}

fn principal_for(user: &User) -> Principal {
    Principal {
        user_id: user.id.value(),
        session_id: Uuid::new_v4().to_string(),
    }
}

fn app<G: UserQueryGateway + 'static>(gateway: G, principal: Option<Principal>) -> Router {
    let router = handlers::router(gateway);
    match principal {
        Some(principal) => router.layer(Extension(principal)),
        None => router,
    }
}

fn get_me() -> Request<Body> {
    Request::builder().uri("/me").body(Body::empty()).unwrap()
}

/// Gateway whose storage is unreachable
struct UnavailableGateway;

#[async_trait]
impl UserQueryGateway for UnavailableGateway {
    async fn read_by_id(&self, _user_id: &UserId) -> UserResult<Option<User>> {
        Err(UserError::DataMapper(
            "pool timed out while waiting for an open connection".to_string(),
        ))
    }
}

#[tokio::test]
async fn test_get_me_returns_current_user() {
    let alice = user("alice.smith", UserRole::Admin);
    let principal = principal_for(&alice);
    let bobby = user("bobby", UserRole::User);
    let gateway = InMemoryUserQueryGateway::with_users([alice.clone(), bobby]);

    let response = app(gateway, Some(principal)).oneshot(get_me()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: UserQueryModel = json_body(response.into_body()).await;
    assert_eq!(
        body,
        UserQueryModel {
            id: alice.id.value(),
            username: "alice.smith".to_string(),
            role: UserRole::Admin,
            is_active: true,
        }
    );
}

#[tokio::test]
async fn test_get_me_exposes_only_projection_fields() {
    let alice = user("alice", UserRole::SuperAdmin);
    let principal = principal_for(&alice);

    let response = app(InMemoryUserQueryGateway::with_users([alice]), Some(principal))
        .oneshot(get_me())
        .await
        .unwrap();

    let body: Value = json_body(response.into_body()).await;
    let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["id", "is_active", "role", "username"]);
    assert_eq!(body["role"], "super_admin");
}

#[tokio::test]
async fn test_get_me_reports_inactive_user() {
    let mut frozen = user("frozen", UserRole::User);
    frozen.is_active = false;
    let principal = principal_for(&frozen);

    let response = app(InMemoryUserQueryGateway::with_users([frozen]), Some(principal))
        .oneshot(get_me())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: UserQueryModel = json_body(response.into_body()).await;
    assert!(!body.is_active);
}

#[tokio::test]
async fn test_get_me_without_principal_returns_401() {
    let gateway = InMemoryUserQueryGateway::with_users([user("alice", UserRole::User)]);

    let response = app(gateway, None).oneshot(get_me()).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["code"], 1006);
}

#[tokio::test]
async fn test_get_me_for_deleted_user_returns_401() {
    let ghost = user("ghost", UserRole::User);
    let principal = principal_for(&ghost);

    let response = app(InMemoryUserQueryGateway::new(), Some(principal))
        .oneshot(get_me())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_me_without_principal_ignores_storage_failure() {
    let response = app(UnavailableGateway, None).oneshot(get_me()).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_me_storage_failure_returns_503() {
    let principal = principal_for(&user("alice", UserRole::User));

    let response = app(UnavailableGateway, Some(principal))
        .oneshot(get_me())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["message"], "Service is temporarily unavailable");
    assert!(!body.to_string().contains("pool timed out"));
}

#[tokio::test]
async fn test_concurrent_sessions_see_only_their_own_user() {
    let alice = user("alice", UserRole::Admin);
    let bobby = user("bobby", UserRole::User);
    let gateway = InMemoryUserQueryGateway::with_users([alice.clone(), bobby.clone()]);

    let alice_app = app(gateway.clone(), Some(principal_for(&alice)));
    let bobby_app = app(gateway, Some(principal_for(&bobby)));

    let (alice_response, bobby_response) =
        tokio::join!(alice_app.oneshot(get_me()), bobby_app.oneshot(get_me()));

    let alice_body: UserQueryModel = json_body(alice_response.unwrap().into_body()).await;
    let bobby_body: UserQueryModel = json_body(bobby_response.unwrap().into_body()).await;

    assert_eq!(alice_body.id, alice.id.value());
    assert_eq!(alice_body.username, "alice");
    assert_eq!(bobby_body.id, bobby.id.value());
    assert_eq!(bobby_body.username, "bobby");
}

#[test]
fn test_openapi_documents_get_me() {
    let doc = serde_json::to_value(handlers::ApiDoc::openapi()).unwrap();
    let operation = &doc["paths"]["/me"]["get"];

    assert_eq!(operation["description"], GET_CURRENT_USER_DESCRIPTION);
    assert_eq!(operation["security"][0]["cookie_auth"], serde_json::json!([]));
    for status in ["200", "401", "403", "503"] {
        assert!(
            operation["responses"].get(status).is_some(),
            "missing {} response",
            status
        );
    }
}
