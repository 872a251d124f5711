//! Typed HTTP client for the PocketWork REST API.
//!
//! This is the data side of the desktop client: it only talks HTTP and maps
//! JSON into the [`self::models`] types with a few display helpers. Enum
//! fields reuse the server's own types from the `models` crate.

pub mod errors;
pub mod models;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub use errors::ClientError;
pub use self::models::{CreateCustomerModel, CreateOrderModel, CustomerModel, OrderModel};
pub use ::models::enums::OrderType;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    // customers

    pub async fn get_customers(&self) -> Result<Vec<CustomerModel>, ClientError> {
        self.get("/api/customers").await
    }

    pub async fn get_customer(&self, id: i32) -> Result<Option<CustomerModel>, ClientError> {
        self.get_optional(&format!("/api/customers/{}", id)).await
    }

    pub async fn create_customer(&self, customer: &CreateCustomerModel) -> Result<CustomerModel, ClientError> {
        self.post("/api/customers", customer).await
    }

    pub async fn update_customer(&self, id: i32, customer: &CreateCustomerModel) -> Result<(), ClientError> {
        let res = self.http.put(self.url(&format!("/api/customers/{}", id))).json(customer).send().await?;
        ensure_success(res).await.map(drop)
    }

    pub async fn delete_customer(&self, id: i32) -> Result<(), ClientError> {
        self.delete(&format!("/api/customers/{}", id)).await
    }

    pub async fn search_customers(&self, term: &str) -> Result<Vec<CustomerModel>, ClientError> {
        let res = self
            .http
            .get(self.url("/api/customers/search"))
            .query(&[("term", term)])
            .send()
            .await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    // orders

    pub async fn get_orders(&self) -> Result<Vec<OrderModel>, ClientError> {
        self.get("/api/orders").await
    }

    pub async fn get_order(&self, id: i32) -> Result<Option<OrderModel>, ClientError> {
        self.get_optional(&format!("/api/orders/{}", id)).await
    }

    pub async fn create_order(&self, order: &CreateOrderModel) -> Result<OrderModel, ClientError> {
        self.post("/api/orders", order).await
    }

    pub async fn delete_order(&self, id: i32) -> Result<(), ClientError> {
        self.delete(&format!("/api/orders/{}", id)).await
    }

    pub async fn get_orders_by_customer(&self, customer_id: i32) -> Result<Vec<OrderModel>, ClientError> {
        self.get(&format!("/api/orders/customer/{}", customer_id)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(path, "GET");
        let res = self.http.get(self.url(path)).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ClientError> {
        debug!(path, "GET");
        let res = self.http.get(self.url(path)).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(ensure_success(res).await?.json().await?))
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        debug!(path, "POST");
        let res = self.http.post(self.url(path)).json(body).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        debug!(path, "DELETE");
        let res = self.http.delete(self.url(path)).send().await?;
        ensure_success(res).await.map(drop)
    }
}

async fn ensure_success(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
