use std::{fs, net::SocketAddr, path::PathBuf};

use serde_json::{Value, json};
use server::{app, config::Config, state::AppState};
use tempfile::{TempDir, tempdir};

const CATALOG: &str = r#"[
    {"product_id": "p-2", "product_name": "Veg Biryani", "product_price": 90, "shelf": "B4"},
    {"product_id": "p-1", "product_name": "Mango Juice", "product_price": 40,
     "calories": "120 kcal"}
]"#;

async fn spawn_server(catalog_path: PathBuf) -> SocketAddr {
    let state = AppState::new(Config {
        port: 0,
        catalog_path,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move { axum::serve(listener, app(state)).await.expect("serve app") });

    addr
}

fn catalog_dir(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    fs::write(&path, contents).expect("write catalog");

    (dir, path)
}

async fn get(addr: SocketAddr, path: &str) -> (u16, Value) {
    let response = reqwest::get(format!("http://{addr}{path}"))
        .await
        .expect("send request");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("json body");

    (status, body)
}

#[tokio::test]
async fn serves_catalog_verbatim_in_file_order() {
    let (_dir, path) = catalog_dir(CATALOG);
    let addr = spawn_server(path).await;

    let (status, body) = get(addr, "/api/products").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": [
                {
                    "product_id": "p-2",
                    "product_name": "Veg Biryani",
                    "product_price": 90,
                    "shelf": "B4"
                },
                {
                    "product_id": "p-1",
                    "product_name": "Mango Juice",
                    "product_price": 40,
                    "calories": "120 kcal"
                }
            ]
        })
    );
}

#[tokio::test]
async fn ignores_query_parameters() {
    let (_dir, path) = catalog_dir(CATALOG);
    let addr = spawn_server(path).await;

    let (status, body) = get(addr, "/api/products?category=drinks&page=2&limit=1").await;

    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn empty_catalog_is_a_success() {
    let (_dir, path) = catalog_dir("[]");
    let addr = spawn_server(path).await;

    let (status, body) = get(addr, "/api/products").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({"success": true, "data": []}));
}

#[tokio::test]
async fn missing_catalog_returns_failure_envelope() {
    let dir = tempdir().expect("tempdir");
    let addr = spawn_server(dir.path().join("absent.json")).await;

    let (status, body) = get(addr, "/api/products").await;

    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|e| e.starts_with("Catalog unavailable"))
    );
}

#[tokio::test]
async fn corrupt_catalog_fails_and_server_keeps_serving() {
    let (_dir, path) = catalog_dir("[{\"product_id\": ");
    let addr = spawn_server(path.clone()).await;

    let (status, body) = get(addr, "/api/products").await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);

    let (status, _) = get(addr, "/api/products").await;
    assert_eq!(status, 500);

    fs::write(&path, CATALOG).expect("repair catalog");

    let (status, body) = get(addr, "/api/products").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn non_array_document_is_rejected() {
    let (_dir, path) = catalog_dir(r#"{"products": []}"#);
    let addr = spawn_server(path).await;

    let (status, body) = get(addr, "/api/products").await;

    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn catalog_changes_show_up_without_restart() {
    let (_dir, path) = catalog_dir(CATALOG);
    let addr = spawn_server(path.clone()).await;

    let (_, before) = get(addr, "/api/products").await;
    assert_eq!(before["data"].as_array().map(Vec::len), Some(2));

    fs::write(
        &path,
        r#"[{"product_id": "p-9", "product_name": "Paneer Wrap", "product_price": 70}]"#,
    )
    .expect("rewrite catalog");

    let (_, after) = get(addr, "/api/products").await;
    assert_eq!(after["data"][0]["product_id"], "p-9");
    assert_eq!(after["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (_dir, path) = catalog_dir(CATALOG);
    let addr = spawn_server(path).await;

    let (status, body) = get(addr, "/api/orders").await;

    assert_eq!(status, 404);
    assert_eq!(body, json!({"success": false, "error": "Route not found"}));
}
