use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use service::dto::{CreateCustomer, CustomerResponse, UpdateCustomer};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-sensitive substring of name or surname.
    #[serde(default)]
    pub term: String,
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses((status = 200, description = "All customers with order counts", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CustomerResponse>>, JsonApiError> {
    let all = state.customers.get_all().await?;
    info!(count = all.len(), "list customers");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<CustomerResponse>, JsonApiError> {
    let Path(id) = id?;
    match state.customers.get_by_id(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("customer with id {} not found", id)))),
    }
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateCustomer>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let created = state.customers.create(input).await?;
    let location = format!("/api/customers/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCustomer>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    input.validate()?;
    state.customers.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted or absent"),
        (status = 409, description = "Customer still owns orders", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/customers/search", tag = "customers",
    params(SearchQuery),
    responses((status = 200, description = "Matching customers", body = [crate::openapi::CustomerDoc]))
)]
pub async fn search(State(state): State<ServerState>, Query(q): Query<SearchQuery>) -> Result<Json<Vec<CustomerResponse>>, JsonApiError> {
    let hits = state.customers.search_by_name(&q.term).await?;
    info!(term = %q.term, count = hits.len(), "search customers");
    Ok(Json(hits))
}
