//! Create `orders` table with FK to `customers`.
//!
//! Deleting a customer that still owns orders is restricted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::CustomerId))
                    // OrderType as its integer discriminant
                    .col(integer(Orders::OrderType))
                    .col(date(Orders::OrderDate))
                    .col(ColumnDef::new(Orders::OrderTime).time().not_null())
                    .col(integer(Orders::ReservedSeconds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    CustomerId,
    OrderType,
    OrderDate,
    OrderTime,
    ReservedSeconds,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }
