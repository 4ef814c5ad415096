use std::time::Duration as StdDuration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use crate::server::{
    model::user::User,
    router::router,
    service::{
        auth::jwt::{JwtService, TokenType},
        device_mode::DeviceModeService,
    },
    state::AppState,
};

mod member;
mod payment;

const SECRET: &str = "controller-secret";

fn jwt() -> JwtService {
    JwtService::new(SECRET, Duration::minutes(5), Duration::days(1))
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(
        db.clone(),
        jwt(),
        DeviceModeService::new(StdDuration::from_secs(60)),
        Url::parse("http://gym.test").unwrap(),
        "Fitness First Gym".to_string(),
    ))
}

/// Issues an access token for a user created by a factory.
fn token_for(user: &entity::user::Model) -> String {
    jwt()
        .issue(&User::from_entity(user.clone()), TokenType::Access)
        .unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and returns the status with the body parsed as JSON (`Null` if empty).
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
