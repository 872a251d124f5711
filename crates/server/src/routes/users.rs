use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use models::enums::JobType;
use service::dto::{CreateUser, UpdateUser, UserResponse};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    responses((status = 200, description = "All users", body = [crate::openapi::UserDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserResponse>>, JsonApiError> {
    Ok(Json(state.users.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<UserResponse>, JsonApiError> {
    let Path(id) = id?;
    state
        .users
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("user with id {} not found", id))))
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let created = state.users.create(input).await?;
    let location = format!("/api/users/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    input.validate()?;
    state.users.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 204, description = "Deleted or absent"))
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/users/jobtype/{job_type}", tag = "users",
    params(("job_type" = String, Path, description = "Job type name or its integer value (0 to 3)")),
    responses(
        (status = 200, description = "Users with that job type", body = [crate::openapi::UserDoc]),
        (status = 400, description = "Unknown job type", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_job_type(
    State(state): State<ServerState>,
    job_type: Result<Path<JobType>, PathRejection>,
) -> Result<Json<Vec<UserResponse>>, JsonApiError> {
    let Path(job_type) = job_type?;
    let found = state.users.get_by_job_type(job_type).await?;
    info!(%job_type, count = found.len(), "users by job type");
    Ok(Json(found))
}
