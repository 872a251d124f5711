//! Create `service_types` table. Prices are optional whole numbers.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceTypes::Id))
                    .col(string_len(ServiceTypes::Name, 200))
                    .col(integer_null(ServiceTypes::Price))
                    .col(integer_null(ServiceTypes::MinPrice))
                    .col(integer_null(ServiceTypes::MaxPrice))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceTypes { Table, Id, Name, Price, MinPrice, MaxPrice }
