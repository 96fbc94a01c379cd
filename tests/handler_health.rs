mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_counts() {
    let server = common::make_server();

    common::create_film(&server, "Matrix").await;
    common::create_user(&server, "neo").await;
    common::create_user(&server, "trinity").await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["films"]["status"], "ok");
    assert_eq!(json["checks"]["films"]["message"], "1 stored");
    assert_eq!(json["checks"]["users"]["message"], "2 stored");
}
