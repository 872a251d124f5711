//! Create `customers` table.
//!
//! Orders reference it; see the restrict FK in the orders migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::Id))
                    .col(string_len(Customers::Name, 100))
                    .col(string_len(Customers::Surname, 100))
                    .col(string_len(Customers::PhoneNumber, 20))
                    .col(string_len(Customers::Email, 200))
                    .col(ColumnDef::new(Customers::Address).string_len(500).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customers { Table, Id, Name, Surname, PhoneNumber, Email, Address }
