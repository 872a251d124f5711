use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use sea_orm::sea_query::ForeignKeyAction;

use crate::customer;
use crate::enums::OrderType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub order_type: OrderType,
    pub order_date: Date,
    pub order_time: Time,
    /// Reserved duration in whole seconds.
    pub reserved_seconds: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_reserved_seconds(seconds: i32) -> Result<(), crate::errors::ModelError> {
    if seconds < 0 {
        return Err(crate::errors::ModelError::Validation("reserved_time must not be negative".into()));
    }
    Ok(())
}
