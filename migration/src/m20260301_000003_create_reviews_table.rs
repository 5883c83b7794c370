use sea_orm_migration::prelude::*;

/// Creates the `reviews` table linking a user's score and comment to a game.
///
/// Both foreign keys cascade on delete so removing a game or a user never
/// leaves orphaned reviews behind. Constraint names follow the
/// `fk_<table>_<column>_<referred_table>` convention.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    Score,
    Comment,
    CreatedAt,
    UpdatedAt,
    GameId,
    UserId,
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reviews::Score)
                            .integer()
                            .not_null()
                            .check(Expr::col(Reviews::Score).between(1, 10)),
                    )
                    .col(ColumnDef::new(Reviews::Comment).string().null())
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Reviews::GameId).integer().not_null())
                    .col(ColumnDef::new(Reviews::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_game_id_games")
                            .from(Reviews::Table, Reviews::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_user_id_users")
                            .from(Reviews::Table, Reviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_game_id")
                    .table(Reviews::Table)
                    .col(Reviews::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_user_id")
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}
