use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    #[schema(example = "Not Found")]
    pub error: String,
    pub detail: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerInputDoc {
    pub name: String,
    pub surname: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub address: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: Option<String>,
    pub orders_count: i64,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateOrderDoc {
    pub customer_id: i32,
    /// Variant name or its integer value.
    #[schema(example = "Standard")]
    pub order_type: String,
    #[schema(example = "2024-01-10")]
    pub order_date: String,
    #[schema(example = "10:00:00")]
    pub order_time: String,
    #[schema(example = "01:00:00")]
    pub reserved_time: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateOrderDoc {
    /// Variant name or its integer value.
    #[schema(example = "Express")]
    pub order_type: String,
    pub order_date: String,
    pub order_time: String,
    pub reserved_time: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderDoc {
    pub id: i32,
    pub customer_id: i32,
    #[schema(example = "John Doe")]
    pub customer_name: Option<String>,
    pub order_type: String,
    pub order_date: String,
    pub order_time: String,
    pub reserved_time: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceTypeInputDoc {
    pub name: String,
    pub price: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceTypeDoc {
    pub id: i32,
    pub name: String,
    pub price: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserInputDoc {
    pub name: String,
    pub surname: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Variant name or its integer value.
    #[schema(example = "Worker")]
    pub job_type: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub job_type: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::customers::search,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::create,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::orders::by_customer,
        crate::routes::orders::by_date_range,
        crate::routes::service_types::list,
        crate::routes::service_types::get,
        crate::routes::service_types::create,
        crate::routes::service_types::update,
        crate::routes::service_types::delete,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::users::by_job_type,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CustomerInputDoc,
            CustomerDoc,
            CreateOrderDoc,
            UpdateOrderDoc,
            OrderDoc,
            ServiceTypeInputDoc,
            ServiceTypeDoc,
            UserInputDoc,
            UserDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "orders"),
        (name = "service_types"),
        (name = "users")
    )
)]
pub struct ApiDoc;
