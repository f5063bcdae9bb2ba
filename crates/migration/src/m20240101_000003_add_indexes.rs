use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Fruit: lookups and delete guards go through provider_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fruit_provider_id")
                    .table(Fruit::Table)
                    .col(Fruit::ProviderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_fruit_provider_id").table(Fruit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Fruit { Table, ProviderId }
