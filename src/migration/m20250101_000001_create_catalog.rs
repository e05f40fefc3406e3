use sea_orm::Schema;
use sea_orm_migration::prelude::*;

use crate::entity::{People, Planets, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        manager
            .create_table(schema.create_table_from_entity(Users).if_not_exists().to_owned())
            .await?;
        manager
            .create_table(schema.create_table_from_entity(People).if_not_exists().to_owned())
            .await?;
        manager
            .create_table(schema.create_table_from_entity(Planets).if_not_exists().to_owned())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
