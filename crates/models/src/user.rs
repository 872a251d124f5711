use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::JobType;
use crate::{errors, validation};

pub const NAME_MAX: usize = 100;
pub const SURNAME_MAX: usize = 100;
pub const PHONE_MAX: usize = 20;
pub const EMAIL_MAX: usize = 200;

/// Staff member. Customers live in [`crate::customer`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
    pub job_type: JobType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    validation::required("name", name, NAME_MAX)
}

pub fn validate(name: &str, surname: &str, phone_number: &str, email: &str) -> Result<(), errors::ModelError> {
    validate_name(name)?;
    validation::required("surname", surname, SURNAME_MAX)?;
    validation::max_len("phone_number", phone_number, PHONE_MAX)?;
    validation::max_len("email", email, EMAIL_MAX)?;
    Ok(())
}
