use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::server::{
    model::user::User,
    service::auth::jwt::{JwtService, TokenType},
};

mod authorize;

fn jwt() -> JwtService {
    JwtService::new("guard-secret", Duration::minutes(5), Duration::days(1))
}

fn bearer(jwt: &JwtService, user: &User, token_type: TokenType) -> HeaderMap {
    let token = jwt.issue(user, token_type).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
