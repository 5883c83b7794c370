//! Outbound JSON shapes for each entity.
//!
//! Relationships are stored in both directions, but a view only ever walks
//! them one way: a game lists its reviews, and each of those reviews names
//! its game by id instead of embedding it again. The same holds for users.
//! This keeps every response finite and acyclic.

use serde::Serialize;

use crate::entities::{game, review, user};

/// A review with its foreign keys and no embedded game or user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub id: i32,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub game_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub reviews: Vec<ReviewView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub reviews: Vec<ReviewView>,
}

impl From<review::Model> for ReviewView {
    fn from(r: review::Model) -> Self {
        Self {
            id: r.id,
            score: r.score,
            comment: r.comment,
            created_at: r.created_at.to_string(),
            updated_at: r.updated_at.map(|t| t.to_string()),
            game_id: r.game_id,
            user_id: r.user_id,
        }
    }
}

impl GameView {
    #[must_use]
    pub fn new(game: game::Model, reviews: Vec<review::Model>) -> Self {
        Self {
            id: game.id,
            title: game.title,
            genre: game.genre,
            platform: game.platform,
            price: game.price,
            created_at: game.created_at.to_string(),
            updated_at: game.updated_at.map(|t| t.to_string()),
            reviews: reviews.into_iter().map(ReviewView::from).collect(),
        }
    }
}

impl UserView {
    #[must_use]
    pub fn new(user: user::Model, reviews: Vec<review::Model>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.map(|t| t.to_string()),
            reviews: reviews.into_iter().map(ReviewView::from).collect(),
        }
    }
}
