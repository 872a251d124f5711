use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode;
use sea_orm::Database;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, state::ServerState};

struct TestApp {
    base_url: String,
    http: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.http.post(self.url(path)).json(&body).send().await?)
    }

    async fn get_json(&self, path: &str) -> anyhow::Result<(StatusCode, Value)> {
        let res = self.http.get(self.url(path)).send().await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;

    let app = routes::build_router(ServerState::from_db(db), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), http: reqwest::Client::new() })
}

fn john() -> Value {
    json!({"name": "John", "surname": "Doe", "email": "john@test.com"})
}

fn order_for(customer_id: i64, date: &str) -> Value {
    json!({
        "customerId": customer_id,
        "orderType": "Standard",
        "orderDate": date,
        "orderTime": "10:00:00",
        "reservedTime": "01:00:00"
    })
}

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get_json("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = app.get_json("/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/customers"].is_object());
    Ok(())
}

#[tokio::test]
async fn customer_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.post("/api/customers", john()).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers().get("location").and_then(|v| v.to_str().ok()).map(str::to_string);
    let created: Value = res.json().await?;
    assert_eq!(created["id"], 1);
    assert_eq!(created["fullName"], "John Doe");
    assert_eq!(created["ordersCount"], 0);
    assert_eq!(location.as_deref(), Some("/api/customers/1"));

    let (status, fetched) = app.get_json("/api/customers/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let res = app
        .http
        .put(app.url("/api/customers/1"))
        .json(&json!({"name": "Johnny", "surname": "Doe", "email": "john@test.com", "address": "Main St"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let (_, fetched) = app.get_json("/api/customers/1").await?;
    assert_eq!(fetched["name"], "Johnny");
    assert_eq!(fetched["address"], "Main St");

    let res = app.http.put(app.url("/api/customers/99")).json(&john()).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.http.delete(app.url("/api/customers/1")).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = app.http.delete(app.url("/api/customers/1")).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.http.get(app.url("/api/customers/1")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn validation_errors_are_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.post("/api/customers", json!({"name": "", "surname": "Doe", "email": "x@test.com"})).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");

    let res = app.post("/api/customers", json!({"name": "John"})).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.post("/api/servicetypes", json!({"name": "Cut", "minPrice": 500, "maxPrice": 100})).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn orders_resolve_customer_and_enforce_references() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/api/customers", john()).await?;

    let res = app.post("/api/orders", order_for(1, "2024-01-10")).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: Value = res.json().await?;
    assert_eq!(order["customerName"], "John Doe");
    assert_eq!(order["reservedTime"], "01:00:00");

    let res = app.post("/api/orders", order_for(42, "2024-01-10")).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Invalid Reference");

    let (_, by_customer) = app.get_json("/api/orders/customer/1").await?;
    assert_eq!(by_customer, json!([order.clone()]));

    let (_, all) = app.get_json("/api/orders").await?;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let (_, customer) = app.get_json("/api/customers/1").await?;
    assert_eq!(customer["ordersCount"], 1);

    let res = app.http.delete(app.url("/api/customers/1")).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.post("/api/orders", json!({
        "customerId": 1, "orderType": "Overnight", "orderDate": "2024-01-10",
        "orderTime": "10:00:00", "reservedTime": "01:00:00"
    })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn orders_by_date_range() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/api/customers", john()).await?;
    for d in ["2024-01-01", "2024-01-31", "2024-02-01"] {
        app.post("/api/orders", order_for(1, d)).await?;
    }

    let (status, hits) = app.get_json("/api/orders/daterange?from=2024-01-01&to=2024-01-31").await?;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = hits.as_array().into_iter().flatten().filter_map(|o| o["orderDate"].as_str()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-31"]);

    let (_, none) = app.get_json("/api/orders/daterange?from=2024-03-01&to=2024-01-01").await?;
    assert_eq!(none, json!([]));

    let res = app.http.get(app.url("/api/orders/daterange?from=yesterday&to=2024-01-01")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn customer_search() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/api/customers", john()).await?;
    app.post("/api/customers", json!({"name": "Jane", "surname": "Mcdoe", "email": "jane@test.com"})).await?;

    let (_, hits) = app.get_json("/api/customers/search?term=doe").await?;
    let names: Vec<&str> = hits.as_array().into_iter().flatten().filter_map(|c| c["fullName"].as_str()).collect();
    assert_eq!(names, vec!["Jane Mcdoe"]);
    Ok(())
}

#[tokio::test]
async fn users_by_job_type() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/api/users", json!({"name": "Petr", "surname": "Novak", "jobType": "Worker"})).await?;
    app.post("/api/users", json!({"name": "Jana", "surname": "Novak", "jobType": "Manager"})).await?;

    let (status, workers) = app.get_json("/api/users/jobtype/Worker").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workers.as_array().map(Vec::len), Some(1));
    assert_eq!(workers[0]["fullName"], "Petr Novak");

    let (status, by_number) = app.get_json("/api/users/jobtype/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_number, workers);

    let res = app.post("/api/users", json!({"name": "Ota", "surname": "Mach", "jobType": 3})).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let admin: Value = res.json().await?;
    assert_eq!(admin["jobType"], "Administrator");

    for bad in ["/api/users/jobtype/Janitor", "/api/users/jobtype/9"] {
        let (status, body) = app.get_json(bad).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(body["error"], "Invalid Path");
    }
    Ok(())
}

#[tokio::test]
async fn order_type_accepts_integer_value() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/api/customers", john()).await?;

    let mut payload = order_for(1, "2024-01-10");
    payload["orderType"] = json!(2);
    let res = app.post("/api/orders", payload).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: Value = res.json().await?;
    assert_eq!(order["orderType"], "Express");

    let mut payload = order_for(1, "2024-01-10");
    payload["orderType"] = json!(7);
    let res = app.post("/api/orders", payload).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn malformed_ids_are_json_bad_requests() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.get_json("/api/customers/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Path");

    let res = app.http.put(app.url("/api/orders/abc")).json(&order_for(1, "2024-01-10")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Invalid Path");

    let res = app.http.delete(app.url("/api/users/1.5")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Invalid Path");

    let (status, body) = app.get_json("/api/orders/customer/x").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Path");
    Ok(())
}
