use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fruit::Table)
                    .if_not_exists()
                    .col(big_integer(Fruit::Id).auto_increment().primary_key())
                    .col(string_len(Fruit::Name, 255).not_null())
                    .col(integer(Fruit::WeightInKilos).not_null())
                    .col(big_integer(Fruit::ProviderId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fruit_provider")
                            .from(Fruit::Table, Fruit::ProviderId)
                            .to(Provider::Table, Provider::Id)
                            // deleting a provider with fruits must fail, never cascade
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Fruit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Fruit {
    Table,
    Id,
    Name,
    WeightInKilos,
    ProviderId,
}

#[derive(DeriveIden)]
enum Provider { Table, Id }
