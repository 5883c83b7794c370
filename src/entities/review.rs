use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;

use super::validation::{ValidationError, check_score};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub game_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModel {
    /// Assign the score, rejecting anything outside `1..=10`.
    ///
    /// Used by both the create and the patch path so they fail identically.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreOutOfRange`] and leaves the field untouched.
    pub fn set_score(&mut self, score: i32) -> Result<(), ValidationError> {
        self.score = ActiveValue::Set(check_score(score)?);
        Ok(())
    }

    /// Assign a score that may be `null` on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreRequired`] for `None`, otherwise as [`Self::set_score`].
    pub fn set_nullable_score(&mut self, score: Option<i32>) -> Result<(), ValidationError> {
        self.set_score(score.ok_or(ValidationError::ScoreRequired)?)
    }

    /// Assign the comment; `None` clears it.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = ActiveValue::Set(comment);
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(score) = self.score {
            check_score(score).map_err(ValidationError::into_db_err)?;
        }

        let now = chrono::Utc::now().fixed_offset();
        if insert {
            self.created_at = ActiveValue::Set(now);
        } else {
            self.updated_at = ActiveValue::Set(Some(now));
        }
        Ok(self)
    }
}
