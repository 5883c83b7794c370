use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entities::{review, user},
    error::AppError,
    state::AppState,
    views::UserView,
};

/// User router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// `GET /users` — All users, each with the reviews they wrote.
async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .find_with_related(review::Entity)
        .order_by_asc(review::Column::Id)
        .all(&state.db)
        .await?;

    let views: Vec<UserView> = users
        .into_iter()
        .map(|(user, reviews)| UserView::new(user, reviews))
        .collect();

    Ok(Json(views))
}
