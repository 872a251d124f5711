use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, order, validation};

pub const NAME_MAX: usize = 100;
pub const SURNAME_MAX: usize = 100;
pub const PHONE_MAX: usize = 20;
pub const EMAIL_MAX: usize = 200;
pub const ADDRESS_MAX: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Orders,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Orders => Entity::has_many(order::Entity).into() }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

pub fn validate(
    name: &str,
    surname: &str,
    phone_number: &str,
    email: &str,
    address: Option<&str>,
) -> Result<(), errors::ModelError> {
    validation::required("name", name, NAME_MAX)?;
    validation::required("surname", surname, SURNAME_MAX)?;
    validation::max_len("phone_number", phone_number, PHONE_MAX)?;
    validation::required("email", email, EMAIL_MAX)?;
    validation::optional("address", address, ADDRESS_MAX)?;
    Ok(())
}
