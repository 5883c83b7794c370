#![allow(dead_code)]
#![allow(clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

use game_review_api::config::Config;
use game_review_api::entities::{game, review, user};
use game_review_api::state::AppState;

/// Build the app router backed by an in-memory `SQLite` database with migrations.
///
/// The connection is returned too so tests can arrange and inspect rows directly.
pub async fn test_app() -> (Router, DatabaseConnection) {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();

    let state = AppState {
        db: db.clone(),
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            log_level: "warn".to_string(),
        },
    };

    (game_review_api::routes::router().with_state(state), db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

/// Test helper: send a DELETE request to the app and return (status, body).
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

async fn with_json(app: &Router, method: &str, uri: &str, body: &Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();
    send(app, request).await
}

/// Test helper: POST a JSON body and return (status, body).
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    with_json(app, "POST", uri, body).await
}

/// Test helper: PATCH a JSON body and return (status, body).
pub async fn patch_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    with_json(app, "PATCH", uri, body).await
}

pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

pub async fn insert_game(db: &DatabaseConnection, title: &str, price: Option<i32>) -> game::Model {
    let mut game = game::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        genre: ActiveValue::Set(Some("Action".to_string())),
        platform: ActiveValue::Set(Some("PC".to_string())),
        ..Default::default()
    };
    game.set_price(price).expect("fixture price must be valid");
    game.insert(db).await.expect("insert game")
}

pub async fn insert_user(db: &DatabaseConnection, name: &str) -> user::Model {
    user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user")
}

pub async fn insert_review(
    db: &DatabaseConnection,
    game_id: i32,
    user_id: i32,
    score: i32,
) -> review::Model {
    let mut review = review::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    };
    review.set_score(score).expect("fixture score must be valid");
    review.set_comment(Some(format!("{score}/10")));
    review.insert(db).await.expect("insert review")
}
