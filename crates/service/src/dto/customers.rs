use models::customer;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Update replaces every mutable field, so it carries the same fields as create.
pub type UpdateCustomer = CreateCustomer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: Option<String>,
    pub orders_count: usize,
}

impl CreateCustomer {
    pub fn validate(&self) -> Result<(), ServiceError> {
        customer::validate(&self.name, &self.surname, &self.phone_number, &self.email, self.address.as_deref())?;
        Ok(())
    }

    pub fn into_active_model(self) -> customer::ActiveModel {
        customer::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            surname: Set(self.surname),
            phone_number: Set(self.phone_number),
            email: Set(self.email),
            address: Set(self.address),
        }
    }

    /// Overwrite all mutable fields; the id is left untouched.
    pub fn apply(self, am: &mut customer::ActiveModel) {
        am.name = Set(self.name);
        am.surname = Set(self.surname);
        am.phone_number = Set(self.phone_number);
        am.email = Set(self.email);
        am.address = Set(self.address);
    }
}

pub fn customer_response(model: customer::Model, orders_count: usize) -> CustomerResponse {
    CustomerResponse {
        full_name: model.full_name(),
        id: model.id,
        name: model.name,
        surname: model.surname,
        phone_number: model.phone_number,
        email: model.email,
        address: model.address,
        orders_count,
    }
}
