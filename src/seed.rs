//! Sample data for local development.
//!
//! Every row goes through the same validating setters the HTTP handlers use,
//! so the seed can never plant a negative price or an out-of-range score.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::entities::{game, review, user};

/// `(title, genre, platform, price)`
const GAMES: &[(&str, &str, &str, i32)] = &[
    ("Hollow Knight", "Metroidvania", "PC", 15),
    ("Celeste", "Platformer", "Switch", 20),
    ("Stardew Valley", "Simulation", "PC", 15),
    ("Hades", "Roguelike", "PS5", 25),
    ("Outer Wilds", "Adventure", "Xbox", 25),
    ("Tetris Effect", "Puzzle", "PS4", 0),
];

const USERS: &[&str] = &["Ada", "Grace", "Linus", "Margaret"];

/// `(game index, user index, score, comment)`
const REVIEWS: &[(usize, usize, i32, &str)] = &[
    (0, 0, 9, "Gorgeous and brutally fair."),
    (0, 1, 8, "Got lost for hours, in a good way."),
    (1, 1, 10, "Tight controls and a big heart."),
    (1, 2, 7, "Chapter 7 nearly broke me."),
    (2, 0, 8, "The most relaxing farm I have owned."),
    (3, 3, 9, "Every run feels different."),
    (4, 2, 10, "Best ending in years."),
    (5, 3, 6, "Pretty, but it is still Tetris."),
];

/// Row counts written by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub games: usize,
    pub users: usize,
    pub reviews: usize,
}

/// Replace all games, users and reviews with the sample catalogue.
///
/// Runs in a single transaction; on error nothing is left half-written.
///
/// # Errors
///
/// Returns an error if any statement fails or a sample row breaks an entity invariant.
pub async fn run(db: &DatabaseConnection) -> anyhow::Result<SeedSummary> {
    let txn = db.begin().await?;

    review::Entity::delete_many().exec(&txn).await?;
    game::Entity::delete_many().exec(&txn).await?;
    user::Entity::delete_many().exec(&txn).await?;

    let mut game_ids = Vec::with_capacity(GAMES.len());
    for &(title, genre, platform, price) in GAMES {
        let mut game = game::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            genre: ActiveValue::Set(Some(genre.to_string())),
            platform: ActiveValue::Set(Some(platform.to_string())),
            ..Default::default()
        };
        game.set_price(Some(price))?;
        game_ids.push(game.insert(&txn).await?.id);
    }

    let mut user_ids = Vec::with_capacity(USERS.len());
    for &name in USERS {
        let user = user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };
        user_ids.push(user.insert(&txn).await?.id);
    }

    for &(game_idx, user_idx, score, comment) in REVIEWS {
        let mut review = review::ActiveModel {
            game_id: ActiveValue::Set(game_ids[game_idx]),
            user_id: ActiveValue::Set(user_ids[user_idx]),
            ..Default::default()
        };
        review.set_score(score)?;
        review.set_comment(Some(comment.to_string()));
        review.insert(&txn).await?;
    }

    txn.commit().await?;

    let summary = SeedSummary {
        games: game_ids.len(),
        users: user_ids.len(),
        reviews: REVIEWS.len(),
    };
    tracing::info!(
        games = summary.games,
        users = summary.users,
        reviews = summary.reviews,
        "seed data written"
    );

    Ok(summary)
}
