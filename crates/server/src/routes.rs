use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod customers;
pub mod orders;
pub mod service_types;
pub mod users;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: entity APIs, health and the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/customers", get(customers::list).post(customers::create))
        .route("/api/customers/search", get(customers::search))
        .route(
            "/api/customers/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        )
        .route("/api/orders", get(orders::list).post(orders::create))
        .route("/api/orders/customer/:customer_id", get(orders::by_customer))
        .route("/api/orders/daterange", get(orders::by_date_range))
        .route("/api/orders/:id", get(orders::get).put(orders::update).delete(orders::delete))
        .route("/api/servicetypes", get(service_types::list).post(service_types::create))
        .route(
            "/api/servicetypes/:id",
            get(service_types::get).put(service_types::update).delete(service_types::delete),
        )
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/jobtype/:job_type", get(users::by_job_type))
        .route("/api/users/:id", get(users::get).put(users::update).delete(users::delete))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
