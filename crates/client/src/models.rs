use ::models::enums::OrderType;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerModel {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub orders_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerModel {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderModel {
    pub id: i32,
    pub customer_id: i32,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub order_type: OrderType,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    /// `HH:MM:SS`
    pub reserved_time: String,
}

impl OrderModel {
    pub fn order_type_name(&self) -> &'static str {
        match self.order_type {
            OrderType::None => "Unknown",
            other => other.name(),
        }
    }

    pub fn formatted_date(&self) -> String { self.order_date.format("%Y-%m-%d").to_string() }

    pub fn formatted_time(&self) -> String { self.order_time.format("%H:%M").to_string() }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderModel {
    pub customer_id: i32,
    pub order_type: OrderType,
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    pub reserved_time: String,
}

impl CreateOrderModel {
    /// New order with the default one hour reservation.
    pub fn new(customer_id: i32, order_type: OrderType, order_date: NaiveDate, order_time: NaiveTime) -> Self {
        Self {
            customer_id,
            order_type,
            order_date,
            order_time,
            reserved_time: "01:00:00".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(order_type: OrderType) -> OrderModel {
        OrderModel {
            id: 1,
            customer_id: 1,
            customer_name: Some("John Doe".into()),
            order_type,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            order_time: NaiveTime::from_hms_opt(9, 5, 30).unwrap(),
            reserved_time: "01:00:00".into(),
        }
    }

    #[test]
    fn display_helpers() {
        let o = order(OrderType::Express);
        assert_eq!(o.order_type_name(), "Express");
        assert_eq!(o.formatted_date(), "2024-01-05");
        assert_eq!(o.formatted_time(), "09:05");
        assert_eq!(order(OrderType::None).order_type_name(), "Unknown");
    }

    #[test]
    fn order_type_is_typed_on_the_wire() {
        let o: OrderModel = serde_json::from_value(serde_json::json!({
            "id": 7, "customerId": 1, "customerName": "John Doe", "orderType": "Subscription",
            "orderDate": "2024-01-05", "orderTime": "09:00:00", "reservedTime": "00:30:00"
        }))
        .unwrap();
        assert_eq!(o.order_type, OrderType::Subscription);
        assert_eq!(o.order_type_name(), "Subscription");

        let unknown = serde_json::json!({
            "id": 7, "customerId": 1, "orderType": "Overnight",
            "orderDate": "2024-01-05", "orderTime": "09:00:00", "reservedTime": "00:30:00"
        });
        assert!(serde_json::from_value::<OrderModel>(unknown).is_err());
    }

    #[test]
    fn new_order_reserves_one_hour() {
        let o = CreateOrderModel::new(
            3,
            OrderType::Standard,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["reservedTime"], "01:00:00");
        assert_eq!(v["customerId"], 3);
        assert_eq!(v["orderType"], "Standard");
    }
}
