use models::service_type;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceType {
    pub name: String,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub min_price: Option<i32>,
    #[serde(default)]
    pub max_price: Option<i32>,
}

pub type UpdateServiceType = CreateServiceType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeResponse {
    pub id: i32,
    pub name: String,
    pub price: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
}

impl CreateServiceType {
    pub fn validate(&self) -> Result<(), ServiceError> {
        service_type::validate(&self.name, self.price, self.min_price, self.max_price)?;
        Ok(())
    }

    pub fn into_active_model(self) -> service_type::ActiveModel {
        service_type::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            price: Set(self.price),
            min_price: Set(self.min_price),
            max_price: Set(self.max_price),
        }
    }

    pub fn apply(self, am: &mut service_type::ActiveModel) {
        am.name = Set(self.name);
        am.price = Set(self.price);
        am.min_price = Set(self.min_price);
        am.max_price = Set(self.max_price);
    }
}

pub fn service_type_response(model: service_type::Model) -> ServiceTypeResponse {
    ServiceTypeResponse {
        id: model.id,
        name: model.name,
        price: model.price,
        min_price: model.min_price,
        max_price: model.max_price,
    }
}
