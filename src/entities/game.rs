use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;

use super::validation::{ValidationError, check_price};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModel {
    /// Assign the price, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativePrice`] and leaves the field untouched.
    pub fn set_price(&mut self, price: Option<i32>) -> Result<(), ValidationError> {
        if let Some(price) = price {
            check_price(price)?;
        }
        self.price = ActiveValue::Set(price);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(Some(price)) = self.price {
            check_price(price).map_err(ValidationError::into_db_err)?;
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
