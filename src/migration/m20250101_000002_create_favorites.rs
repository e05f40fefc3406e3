use sea_orm::Schema;
use sea_orm_migration::prelude::*;

use crate::entity::{Favorites, favorites::Column};

const USER_PLANET_INDEX: &str = "idx_favorites_user_planet";
const USER_PEOPLE_INDEX: &str = "idx_favorites_user_people";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // A favorite points at exactly one catalog entity.
        manager
            .create_table(
                schema
                    .create_table_from_entity(Favorites)
                    .check(Expr::cust("(people_id IS NULL) <> (planet_id IS NULL)"))
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // NULLs never collide in a unique index, so each index only constrains
        // favorites of its own kind.
        manager
            .create_index(
                Index::create()
                    .name(USER_PLANET_INDEX)
                    .table(Favorites)
                    .col(Column::UserId)
                    .col(Column::PlanetId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(USER_PEOPLE_INDEX)
                    .table(Favorites)
                    .col(Column::UserId)
                    .col(Column::PeopleId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
