use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use service::dto::{CreateServiceType, ServiceTypeResponse, UpdateServiceType};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/servicetypes", tag = "service_types",
    responses((status = 200, description = "All service types", body = [crate::openapi::ServiceTypeDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServiceTypeResponse>>, JsonApiError> {
    Ok(Json(state.service_types.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/servicetypes/{id}", tag = "service_types",
    params(("id" = i32, Path, description = "Service type id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceTypeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<ServiceTypeResponse>, JsonApiError> {
    let Path(id) = id?;
    state
        .service_types
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("service type with id {} not found", id))))
}

#[utoipa::path(
    post, path = "/api/servicetypes", tag = "service_types",
    request_body = crate::openapi::ServiceTypeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceTypeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateServiceType>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let created = state.service_types.create(input).await?;
    let location = format!("/api/servicetypes/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/servicetypes/{id}", tag = "service_types",
    params(("id" = i32, Path, description = "Service type id")),
    request_body = crate::openapi::ServiceTypeInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateServiceType>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    input.validate()?;
    state.service_types.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/servicetypes/{id}", tag = "service_types",
    params(("id" = i32, Path, description = "Service type id")),
    responses((status = 204, description = "Deleted or absent"))
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.service_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
