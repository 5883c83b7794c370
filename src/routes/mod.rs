mod games;
mod reviews;
mod users;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /` — plain-text banner
/// - `/games` — read-only game catalogue
/// - `/users` — read-only user list
/// - `/reviews` — review CRUD
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest("/games", games::router())
        .nest("/users", users::router())
        .nest("/reviews", reviews::router())
}

async fn index() -> &'static str {
    "Game Review API"
}
