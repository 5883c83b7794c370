use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
    routing::get,
};
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use crate::{
    entities::{game, review},
    error::AppError,
    state::AppState,
    views::GameView,
};

/// Game catalogue router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games))
        .route("/{id}", get(get_game))
}

/// `GET /games` — All games, each with its reviews.
async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = game::Entity::find()
        .order_by_asc(game::Column::Id)
        .find_with_related(review::Entity)
        .order_by_asc(review::Column::Id)
        .all(&state.db)
        .await?;

    let views: Vec<GameView> = games
        .into_iter()
        .map(|(game, reviews)| GameView::new(game, reviews))
        .collect();

    Ok(Json(views))
}

/// `GET /games/:id` — A single game with its reviews.
async fn get_game(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound("Game not found".to_string());
    let Path(id) = path.map_err(|_| not_found())?;

    let game = game::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(not_found)?;

    let reviews = game
        .find_related(review::Entity)
        .order_by_asc(review::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(GameView::new(game, reviews)))
}
