use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

pub const NAME_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(
    name: &str,
    price: Option<i32>,
    min_price: Option<i32>,
    max_price: Option<i32>,
) -> Result<(), errors::ModelError> {
    validation::required("name", name, NAME_MAX)?;
    validation::non_negative("price", price)?;
    validation::non_negative("min_price", min_price)?;
    validation::non_negative("max_price", max_price)?;
    if let (Some(min), Some(max)) = (min_price, max_price) {
        if min > max {
            return Err(errors::ModelError::Validation("min_price must not exceed max_price".into()));
        }
    }
    Ok(())
}
