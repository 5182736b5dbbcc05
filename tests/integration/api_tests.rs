//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

use custom_tms::{api::create_router, config::AppConfig, AppState};

/// Start a server on an ephemeral port and return its base URL
async fn spawn_app() -> String {
    let state = AppState::new(AppConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

async fn get_json(client: &Client, url: String) -> Value {
    let response = client.get(url).send().await.expect("Failed to send request");
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;
    let client = Client::new();

    let body = get_json(&client, format!("{}/api/v1/health", base)).await;
    assert_eq!(body["status"], "healthy");

    let body = get_json(&client, format!("{}/api/v1/ready", base)).await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_index_shows_dashboard() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client.get(&base).send().await.expect("Failed to send request");
    assert!(response.status().is_success());

    let html = response.text().await.expect("Failed to read body");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Custom TMS Company</title>"));
    assert!(html.contains(r#"id="dashboard-page" class="page active""#));
    assert!(html.contains("$124,000.00"));
}

#[tokio::test]
async fn test_every_page_renders() {
    let base = spawn_app().await;
    let client = Client::new();

    let expected = [
        ("inventory", "Drill Press"),
        ("maintenance", "Calibration"),
        ("checkout", "John Smith"),
        ("users", "David Brown"),
        ("reports", "Utilization Report"),
        ("settings", "Custom TMS Company"),
    ];

    for (page, needle) in expected {
        let response = client
            .get(format!("{}/pages/{}", base, page))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
        let html = response.text().await.expect("Failed to read body");
        assert!(html.contains(needle), "page {} is missing {}", page, needle);

        let state = get_json(&client, format!("{}/api/v1/state", base)).await;
        assert_eq!(state["current_page"], page);
        assert_eq!(state["active_pages"], json!([page]));
        assert_eq!(state["active_nav"], json!([page]));
    }
}

#[tokio::test]
async fn test_unknown_page_is_empty() {
    let base = spawn_app().await;
    let client = Client::new();

    client
        .get(format!("{}/pages/users", base))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .get(format!("{}/pages/billing", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    assert!(response.text().await.expect("Failed to read body").is_empty());

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["current_page"], "users");
    assert_eq!(state["active_pages"], json!([]));
    assert_eq!(state["active_nav"], json!([]));
}

#[tokio::test]
async fn test_inventory_reload_is_identical() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/pages/inventory", base);

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client.get(&url).send().await.unwrap().text().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.matches("data-tool-id=").count(), 6);
}

#[tokio::test]
async fn test_open_and_close_modal() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/modals/add-tool", base))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("modal-overlay active"));
    assert!(html.contains("Add New Tool"));

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["modal"]["open"], true);
    assert_eq!(state["modal"]["kind"], "add-tool");
    assert_eq!(state["modal"]["confirm_label"], "Add Tool");

    let response = client
        .post(format!("{}/modal/close", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["modal"]["open"], false);
}

#[tokio::test]
async fn test_confirm_closes_modal() {
    let base = spawn_app().await;
    let client = Client::new();

    client
        .post(format!("{}/modals/checkout", base))
        .send()
        .await
        .expect("Failed to send request");
    let response = client
        .post(format!("{}/modal/confirm", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["modal"]["open"], false);

    let data = get_json(&client, format!("{}/api/v1/sample-data", base)).await;
    assert_eq!(data["checked_out"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_unknown_modal() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/modals/launch-rocket", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchModal");
    assert_eq!(body["message"], "No modal named 'launch-rocket'");
}

#[tokio::test]
async fn test_quick_action() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/quick-actions", base))
        .json(&json!({ "action": "Generate Report" }))
        .send()
        .await
        .expect("Failed to send request");
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains(r#"<h3 class="modal-title">Generate Report</h3>"#));

    let response = client
        .post(format!("{}/quick-actions", base))
        .json(&json!({ "action": "Order Pizza" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    assert!(response.text().await.expect("Failed to read body").is_empty());

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["modal"]["kind"], "generate-report");
}

#[tokio::test]
async fn test_quick_action_accepts_form_body() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/quick-actions", base))
        .form(&[("action", "Find Tool")])
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains(r#"<h3 class="modal-title">Find Tool</h3>"#));

    let response = client
        .post(format!("{}/quick-actions", base))
        .form(&[("label", "Find Tool")])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_nav_link_returns_full_document() {
    let base = spawn_app().await;
    let client = Client::new();

    let index = client.get(&base).send().await.unwrap().text().await.unwrap();
    let marker = r#"<a class="nav-link" href=""#;
    let start = index.find(marker).expect("No nav link") + marker.len();
    let href = &index[start..start + index[start..].find('"').unwrap()];
    assert_eq!(href, "/?page=dashboard");

    let inventory_href = href.replace("dashboard", "inventory");
    let html = client
        .get(format!("{}{}", base, inventory_href))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.starts_with("<!DOCTYPE html><html"));
    assert!(html.contains(r#"<ul class="nav-list">"#));
    assert!(html.contains(
        r#"<li class="nav-item active"><a class="nav-link" href="/?page=inventory""#
    ));
    assert!(html.contains(r#"<section id="inventory-page" class="page active">"#));
    assert!(html.contains("Industrial Drill Press"));
    assert!(html.contains(r#"id="modal-overlay""#));

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["current_page"], "inventory");
}

#[tokio::test]
async fn test_assets_are_served() {
    let base = spawn_app().await;
    let client = Client::new();

    let index = client.get(&base).send().await.unwrap().text().await.unwrap();
    assert!(index.contains(r#"<link rel="stylesheet" href="/assets/css/style.css">"#));
    assert!(index.contains(r#"<script src="/assets/js/dashboard.js" defer></script>"#));

    let css = client
        .get(format!("{}/assets/css/style.css", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(css.status(), 200);
    assert!(css.headers()["content-type"].to_str().unwrap().starts_with("text/css"));
    assert!(css.text().await.unwrap().contains(".modal-overlay.active"));

    let script = client
        .get(format!("{}/assets/js/dashboard.js", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(script.status(), 200);
    let script = script.text().await.unwrap();
    assert!(script.contains("/quick-actions"));
    assert!(script.contains("/pages/"));
}

#[tokio::test]
async fn test_sample_data_and_tool_lookup() {
    let base = spawn_app().await;
    let client = Client::new();

    let data = get_json(&client, format!("{}/api/v1/sample-data", base)).await;
    assert_eq!(data["tools"].as_array().map(Vec::len), Some(6));
    assert_eq!(data["maintenance"].as_array().map(Vec::len), Some(3));
    assert_eq!(data["users"].as_array().map(Vec::len), Some(4));
    assert_eq!(data["recent_activity"].as_array().map(Vec::len), Some(3));
    assert_eq!(data["tools"][0]["id"], "DP-001");

    let tool = get_json(&client, format!("{}/api/v1/tools/CS-005", base)).await;
    assert_eq!(tool["status"], "Checked Out");

    let response = client
        .get(format!("{}/api/v1/tools/XX-999", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_metrics_and_chart() {
    let base = spawn_app().await;
    let client = Client::new();

    let body = get_json(&client, format!("{}/api/v1/metrics", base)).await;
    assert_eq!(body["metrics"]["total_tools"], 1247);
    assert_eq!(body["total_value_display"], "$124,000.00");

    let chart = get_json(&client, format!("{}/api/v1/charts/usage", base)).await;
    assert_eq!(chart["label"], "Tools Checked Out");
    assert_eq!(chart["points"][5]["label"], "Jun");

    let activity = get_json(&client, format!("{}/api/v1/activity", base)).await;
    assert_eq!(activity[0]["type"], "checkout");
}

#[tokio::test]
async fn test_search() {
    let base = spawn_app().await;
    let client = Client::new();

    let hits = get_json(&client, format!("{}/api/v1/search?q=hand%20tools", base)).await;
    let ids: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|tool| tool["id"].as_str())
        .collect();
    assert_eq!(ids, ["HM-015"]);

    let hits = get_json(&client, format!("{}/api/v1/search", base)).await;
    assert_eq!(hits, json!([]));
}

#[tokio::test]
async fn test_notifications() {
    let base = spawn_app().await;
    let client = Client::new();
    let url = format!("{}/api/v1/notifications", base);

    let response = client
        .post(&url)
        .json(&json!({ "message": "Tool added", "level": "success" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 202);
    let first: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(first["duplicate"], false);

    let response = client
        .post(&url)
        .json(&json!({ "message": "Tool added", "level": "success" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let second: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(second["duplicate"], true);
    assert_eq!(second["id"], first["id"]);

    let response = client
        .post(&url)
        .json(&json!({ "message": "   " }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let list = get_json(&client, url).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["message"], "Tool added");
    assert_eq!(list[0]["level"], "success");
}

#[tokio::test]
async fn test_sidebar_toggle() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/sidebar/toggle", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["open"], true);

    let state = get_json(&client, format!("{}/api/v1/state", base)).await;
    assert_eq!(state["sidebar_open"], true);

    let body: Value = client
        .post(format!("{}/sidebar/close", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["open"], false);
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_app().await;
    let client = Client::new();

    let doc = get_json(&client, format!("{}/api-docs/openapi.json", base)).await;
    assert_eq!(doc["info"]["title"], "Custom TMS API");
    assert!(doc["paths"]["/notifications"].is_object());
}
