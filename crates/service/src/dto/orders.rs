use chrono::{NaiveDate, NaiveTime};
use models::{customer, enums::OrderType, order};
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub customer_id: i32,
    #[serde(default)]
    pub order_type: OrderType,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    #[serde(rename = "reservedTime", with = "super::hms")]
    pub reserved_seconds: i32,
}

/// The owning customer is fixed at creation and cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[serde(default)]
    pub order_type: OrderType,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    #[serde(rename = "reservedTime", with = "super::hms")]
    pub reserved_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: Option<String>,
    pub order_type: OrderType,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    #[serde(rename = "reservedTime", with = "super::hms")]
    pub reserved_seconds: i32,
}

impl CreateOrder {
    pub fn validate(&self) -> Result<(), ServiceError> {
        order::validate_reserved_seconds(self.reserved_seconds)?;
        Ok(())
    }

    pub fn into_active_model(self) -> order::ActiveModel {
        order::ActiveModel {
            id: NotSet,
            customer_id: Set(self.customer_id),
            order_type: Set(self.order_type),
            order_date: Set(self.order_date),
            order_time: Set(self.order_time),
            reserved_seconds: Set(self.reserved_seconds),
        }
    }
}

impl UpdateOrder {
    pub fn validate(&self) -> Result<(), ServiceError> {
        order::validate_reserved_seconds(self.reserved_seconds)?;
        Ok(())
    }

    pub fn apply(self, am: &mut order::ActiveModel) {
        am.order_type = Set(self.order_type);
        am.order_date = Set(self.order_date);
        am.order_time = Set(self.order_time);
        am.reserved_seconds = Set(self.reserved_seconds);
    }
}

/// `customer` is the resolved owner, if it was loaded.
pub fn order_response(model: order::Model, customer: Option<&customer::Model>) -> OrderResponse {
    OrderResponse {
        id: model.id,
        customer_id: model.customer_id,
        customer_name: customer.map(customer::Model::full_name),
        order_type: model.order_type,
        order_date: model.order_date,
        order_time: model.order_time,
        reserved_seconds: model.reserved_seconds,
    }
}
