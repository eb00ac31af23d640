use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_uuid(Movies::Id))
                    .col(string_len(Movies::Title, 255))
                    .col(text_null(Movies::Description))
                    .col(integer_null(Movies::ReleaseYear))
                    .col(string_null(Movies::Genre))
                    .col(string_null(Movies::Director))
                    .col(string_null(Movies::ImageUrl))
                    .col(text_null(Movies::Actors))
                    .col(string_len(Movies::Type, 20).default("MOVIE"))
                    .col(integer_null(Movies::Seasons))
                    .col(integer_null(Movies::Episodes))
                    .col(string_null(Movies::ImdbId))
                    .col(double_null(Movies::ImdbRating))
                    .col(string_null(Movies::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Movies::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Movies::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_type")
                    .table(Movies::Table)
                    .col(Movies::Type)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_created_at")
                    .table(Movies::Table)
                    .col(Movies::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Movies {
    Table,
    Id,
    Title,
    Description,
    ReleaseYear,
    Genre,
    Director,
    ImageUrl,
    Actors,
    Type,
    Seasons,
    Episodes,
    ImdbId,
    ImdbRating,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
