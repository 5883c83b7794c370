use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder,
    TransactionTrait,
};
use serde::Deserialize;
use serde_json::json;

use crate::{entities::review, error::AppError, state::AppState, views::ReviewView};

/// Review management router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route(
            "/{id}",
            get(get_review).patch(update_review).delete(delete_review),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Outer `None` means the key was absent; `Some(None)` means it was `null`.
/// Only an absent key counts as missing.
#[derive(Debug, Deserialize)]
struct CreateReviewRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    score: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    comment: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    game_id: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    user_id: Option<Option<i32>>,
}

/// The mutable fields of a review, with the same absent/`null` split.
/// Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct UpdateReviewRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    score: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    comment: Option<Option<String>>,
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /reviews` — All reviews.
async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = review::Entity::find()
        .order_by_asc(review::Column::Id)
        .all(&state.db)
        .await?;

    let views: Vec<ReviewView> = reviews.into_iter().map(ReviewView::from).collect();
    Ok(Json(views))
}

/// `POST /reviews` — Create a review for an existing game and user.
async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let (Some(score), Some(comment), Some(game_id), Some(user_id)) =
        (req.score, req.comment, req.game_id, req.user_id)
    else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    let txn = state.db.begin().await.map_err(AppError::write_failed)?;

    let mut review: review::ActiveModel = Default::default();
    review.set_nullable_score(score)?;
    review.set_comment(comment);
    // A null id stays NotSet and trips the NOT NULL constraint on insert.
    if let Some(game_id) = game_id {
        review.game_id = ActiveValue::Set(game_id);
    }
    if let Some(user_id) = user_id {
        review.user_id = ActiveValue::Set(user_id);
    }

    // A dangling game_id or user_id is rejected here by the foreign keys.
    let review = review.insert(&txn).await.map_err(AppError::write_failed)?;
    txn.commit().await.map_err(AppError::write_failed)?;

    tracing::info!(
        review_id = review.id,
        game_id = review.game_id,
        user_id = review.user_id,
        "review created"
    );

    Ok((StatusCode::CREATED, Json(ReviewView::from(review))))
}

/// `GET /reviews/:id` — A single review.
async fn get_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = review_id(path)?;
    let review = find_review(&state.db, id).await?;
    Ok(Json(ReviewView::from(review)))
}

/// `PATCH /reviews/:id` — Update the score and/or comment of a review.
async fn update_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = review_id(path)?;
    let txn = state.db.begin().await.map_err(AppError::write_failed)?;
    let review = find_review(&txn, id).await?;

    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut active: review::ActiveModel = review.into();
    if let Some(score) = req.score {
        active.set_nullable_score(score)?;
    }
    if let Some(comment) = req.comment {
        active.set_comment(comment);
    }

    let review = active.update(&txn).await.map_err(AppError::write_failed)?;
    txn.commit().await.map_err(AppError::write_failed)?;

    tracing::info!(review_id = review.id, score = review.score, "review updated");

    Ok(Json(ReviewView::from(review)))
}

/// `DELETE /reviews/:id` — Remove a review.
async fn delete_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = review_id(path)?;
    let txn = state.db.begin().await.map_err(AppError::write_failed)?;
    let review = find_review(&txn, id).await?;

    review.delete(&txn).await.map_err(AppError::write_failed)?;
    txn.commit().await.map_err(AppError::write_failed)?;

    tracing::info!(review_id = id, "review deleted");

    Ok(Json(json!({ "message": "Review deleted successfully" })))
}

// ============================================================================
// Helpers
// ============================================================================

/// An id that does not parse as an integer cannot name a review.
fn review_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("Review not found".to_string()))
}

async fn find_review<C>(db: &C, id: i32) -> Result<review::Model, AppError>
where
    C: ConnectionTrait,
{
    review::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))
}
