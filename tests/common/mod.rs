#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use filmorate::routes::{app_router, router};
use filmorate::state::AppState;
use serde_json::{Value, json};

pub fn make_server() -> TestServer {
    TestServer::new(router(AppState::new(10))).unwrap()
}

/// Server built from the production entry point, trailing slash handling included.
pub fn make_app_server() -> TestServer {
    let app = Router::new().fallback_service(app_router(AppState::new(10)));
    TestServer::new(app).unwrap()
}

pub fn film_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("About {name}"),
        "releaseDate": "1999-03-31",
        "duration": 136
    })
}

pub fn user_body(login: &str) -> Value {
    json!({
        "email": format!("{login}@example.com"),
        "login": login,
        "name": format!("User {login}"),
        "birthday": "1990-05-17"
    })
}

pub async fn create_film(server: &TestServer, name: &str) -> i64 {
    let response = server.post("/films").json(&film_body(name)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn create_user(server: &TestServer, login: &str) -> i64 {
    let response = server.post("/users").json(&user_body(login)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
