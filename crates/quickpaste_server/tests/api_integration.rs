//! Integration tests for the QuickPaste HTTP surface.

mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{setup_test_server, test_config_for_data_path, test_server_for_config};
use tempfile::TempDir;

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("location header")
        .to_string()
}

#[tokio::test]
async fn test_api_paste_lifecycle() {
    let (server, _temp) = setup_test_server();

    let create_response = server
        .post("/api/paste")
        .json(&json!({
            "content": "Hello, World!",
            "title": "greeting"
        }))
        .await;
    assert_eq!(create_response.status_code(), StatusCode::OK);
    let created: serde_json::Value = create_response.json();
    let paste_id = created["id"].as_str().expect("id").to_string();
    assert_eq!(created["paste"]["content"], "Hello, World!");
    assert_eq!(created["paste"]["title"], "greeting");
    assert_eq!(created["paste"]["size"], 13);

    let list_response = server.get("/api/pastes").await;
    assert_eq!(list_response.status_code(), StatusCode::OK);
    let pastes: Vec<serde_json::Value> = list_response.json();
    assert_eq!(pastes.len(), 1);
    assert_eq!(pastes[0]["id"], paste_id.as_str());
    assert_eq!(pastes[0]["content"], "Hello, World!");

    let view_response = server.get(&format!("/paste/{}", paste_id)).await;
    assert_eq!(view_response.status_code(), StatusCode::OK);
    assert!(view_response.text().contains("Hello, World!"));

    let raw_response = server.get(&format!("/raw/{}", paste_id)).await;
    assert_eq!(raw_response.status_code(), StatusCode::OK);
    assert_eq!(raw_response.text(), "Hello, World!");

    let delete_response = server.get(&format!("/delete/{}", paste_id)).await;
    assert_eq!(delete_response.status_code(), StatusCode::SEE_OTHER);
    assert!(location(&delete_response).contains("type=success"));

    let remaining: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_api_create_rejects_empty_content() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post("/api/paste")
        .json(&json!({ "content": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Content cannot be empty");
}

#[tokio::test]
async fn test_api_create_rejects_oversized_content() {
    let temp_dir = TempDir::new().expect("temp dir");
    let data_path = temp_dir.path().join("pastes.json");
    let mut config = test_config_for_data_path(&data_path);
    config.max_paste_size = 100;
    let server = test_server_for_config(config);

    let at_limit = server
        .post("/api/paste")
        .json(&json!({ "content": "x".repeat(100) }))
        .await;
    assert_eq!(at_limit.status_code(), StatusCode::OK);

    let over_limit = server
        .post("/api/paste")
        .json(&json!({ "content": "x".repeat(101) }))
        .await;
    assert_eq!(over_limit.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = over_limit.json();
    assert_eq!(body["error"], "Content too large. Maximum size is 100 characters");
}

#[tokio::test]
async fn test_unknown_paste_returns_404() {
    let (server, _temp) = setup_test_server();

    let view_response = server.get("/paste/ffffffff").await;
    assert_eq!(view_response.status_code(), StatusCode::NOT_FOUND);

    let raw_response = server.get("/raw/ffffffff").await;
    assert_eq!(raw_response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_form_create_redirects_with_flash() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post("/paste")
        .form(&json!({
            "content": "form body",
            "title": "",
            "language": "auto"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    let location = location(&response);
    assert!(location.starts_with("/?message="));
    assert!(location.contains("type=success"));

    let pastes: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    assert_eq!(pastes.len(), 1);
    assert_eq!(pastes[0]["content"], "form body");
    assert!(pastes[0]["title"].is_null());
}

#[tokio::test]
async fn test_form_create_with_blank_content_flashes_error() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post("/paste")
        .form(&json!({
            "content": "   ",
            "title": "",
            "language": "auto"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(location(&response).contains("type=error"));

    let pastes: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    assert!(pastes.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_redirects_with_error_flash() {
    let (server, _temp) = setup_test_server();

    let response = server.get("/delete/ffffffff").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(location(&response).contains("type=error"));
}

#[tokio::test]
async fn test_api_language_auto_detection() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post("/api/paste")
        .json(&json!({
            "content": "def f(): pass",
            "language": "auto"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: serde_json::Value = response.json();
    assert_eq!(created["paste"]["language"], "python");
    assert!(created["paste"]["title"].is_null());

    let explicit = server
        .post("/api/paste")
        .json(&json!({
            "content": "plain words here",
            "language": "rust"
        }))
        .await;
    let explicit_created: serde_json::Value = explicit.json();
    assert_eq!(explicit_created["paste"]["language"], "rust");
}

#[tokio::test]
async fn test_api_listing_is_newest_first() {
    let (server, _temp) = setup_test_server();

    for content in ["paste A", "paste B", "paste C"] {
        let response = server
            .post("/api/paste")
            .json(&json!({ "content": content }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let pastes: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    let contents: Vec<&str> = pastes
        .iter()
        .map(|paste| paste["content"].as_str().expect("content"))
        .collect();
    assert_eq!(contents, ["paste C", "paste B", "paste A"]);
}

#[tokio::test]
async fn test_index_page_renders_and_clamps_pagination() {
    let (server, _temp) = setup_test_server();

    let created = server
        .post("/api/paste")
        .json(&json!({ "content": "indexed body" }))
        .await;
    let paste_id = created.json::<serde_json::Value>()["id"]
        .as_str()
        .expect("id")
        .to_string();

    for path in ["/", "/?page=999", "/?page=0"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "path: {}", path);
        assert!(response.text().contains(&paste_id), "path: {}", path);
    }

    let flash = server.get("/?message=hello&type=success").await;
    assert_eq!(flash.status_code(), StatusCode::OK);
    assert!(flash.text().contains("hello"));
}

#[tokio::test]
async fn test_duplicate_content_shares_an_id_and_delete_removes_all() {
    let (server, _temp) = setup_test_server();

    let first: serde_json::Value = server
        .post("/api/paste")
        .json(&json!({ "content": "same body" }))
        .await
        .json();
    let second: serde_json::Value = server
        .post("/api/paste")
        .json(&json!({ "content": "same body" }))
        .await
        .json();
    assert_eq!(first["id"], second["id"]);

    let pastes: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    assert_eq!(pastes.len(), 2);

    let delete_response = server
        .get(&format!("/delete/{}", first["id"].as_str().expect("id")))
        .await;
    assert_eq!(delete_response.status_code(), StatusCode::SEE_OTHER);

    let remaining: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_store_survives_server_restart() {
    let temp_dir = TempDir::new().expect("temp dir");
    let data_path = temp_dir.path().join("pastes.json");

    {
        let server = test_server_for_config(test_config_for_data_path(&data_path));
        let response = server
            .post("/api/paste")
            .json(&json!({ "content": "durable body" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let server = test_server_for_config(test_config_for_data_path(&data_path));
    let pastes: Vec<serde_json::Value> = server.get("/api/pastes").await.json();
    assert_eq!(pastes.len(), 1);
    assert_eq!(pastes[0]["content"], "durable body");
}
