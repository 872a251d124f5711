use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use service::dto::{CreateOrder, OrderResponse, UpdateOrder};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// First day, `YYYY-MM-DD`, inclusive.
    pub from: NaiveDate,
    /// Last day, `YYYY-MM-DD`, inclusive.
    pub to: NaiveDate,
}

#[utoipa::path(
    get, path = "/api/orders", tag = "orders",
    responses((status = 200, description = "All orders", body = [crate::openapi::OrderDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<OrderResponse>>, JsonApiError> {
    let all = state.orders.get_all().await?;
    info!(count = all.len(), "list orders");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OrderDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<OrderResponse>, JsonApiError> {
    let Path(id) = id?;
    state
        .orders
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("order with id {} not found", id))))
}

#[utoipa::path(
    post, path = "/api/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderDoc),
        (status = 400, description = "Validation error or unknown customer", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateOrder>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let created = state.orders.create(input).await?;
    let location = format!("/api/orders/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = crate::openapi::UpdateOrderDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateOrder>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    input.validate()?;
    state.orders.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses((status = 204, description = "Deleted or absent"))
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/orders/customer/{customer_id}", tag = "orders",
    params(("customer_id" = i32, Path, description = "Owning customer id")),
    responses((status = 200, description = "Orders of the customer", body = [crate::openapi::OrderDoc]))
)]
pub async fn by_customer(
    State(state): State<ServerState>,
    customer_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<OrderResponse>>, JsonApiError> {
    let Path(customer_id) = customer_id?;
    Ok(Json(state.orders.get_orders_by_customer(customer_id).await?))
}

#[utoipa::path(
    get, path = "/api/orders/daterange", tag = "orders",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Orders dated within the range", body = [crate::openapi::OrderDoc]),
        (status = 400, description = "Missing or malformed dates", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_date_range(
    State(state): State<ServerState>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<Vec<OrderResponse>>, JsonApiError> {
    let Query(q) = query?;
    let found = state.orders.get_orders_by_date_range(q.from, q.to).await?;
    info!(from = %q.from, to = %q.to, count = found.len(), "orders by date range");
    Ok(Json(found))
}
