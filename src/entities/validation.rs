use thiserror::Error;

/// Domain error raised when a field assignment would break an entity invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Price must not be negative")]
    NegativePrice,
    #[error("Score must be between 1 and 10")]
    ScoreOutOfRange,
    #[error("Score is required")]
    ScoreRequired,
}

impl ValidationError {
    /// Surface the violation through the store error type for entity hooks.
    pub(crate) fn into_db_err(self) -> sea_orm::DbErr {
        sea_orm::DbErr::Custom(self.to_string())
    }
}

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

/// # Errors
///
/// Returns [`ValidationError::NegativePrice`] for any price below zero.
pub const fn check_price(price: i32) -> Result<i32, ValidationError> {
    if price < 0 {
        return Err(ValidationError::NegativePrice);
    }
    Ok(price)
}

/// # Errors
///
/// Returns [`ValidationError::ScoreOutOfRange`] unless `MIN_SCORE <= score <= MAX_SCORE`.
pub const fn check_score(score: i32) -> Result<i32, ValidationError> {
    if score < MIN_SCORE || score > MAX_SCORE {
        return Err(ValidationError::ScoreOutOfRange);
    }
    Ok(score)
}
