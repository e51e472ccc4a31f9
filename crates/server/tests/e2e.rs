use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use server::startup;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Isolated data file per test run
    let data_file = std::env::temp_dir()
        .join(format!("address_book_e2e_{}", Uuid::new_v4()))
        .join("addressBook.json");
    let app = startup::build_app(data_file).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_address_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/addresses", app.base_url);

    // Fresh data file starts empty
    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    // Create two
    for (n, name) in ["Alice", "Bob"].into_iter().enumerate() {
        let res = c.post(&url).json(&json!({"name": name})).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        let created = res.json::<Value>().await?;
        assert_eq!(created["id"], json!(n + 1));
        assert_eq!(created["name"], name);
    }

    // Update the first
    let res = c
        .put(format!("{url}/1"))
        .json(&json!({"name": "Alicia", "city": "Lisbon"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"name": "Alicia", "city": "Lisbon", "id": 1}));

    // Delete the second
    let res = c.delete(format!("{url}/2")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    let res = c.get(format!("{url}/2")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "Address not found");

    let res = c.get(&url).send().await?;
    assert_eq!(res.json::<Value>().await?, json!([{"name": "Alicia", "city": "Lisbon", "id": 1}]));
    Ok(())
}

#[tokio::test]
async fn e2e_graceful_shutdown_stops_serving() -> anyhow::Result<()> {
    let data_file = std::env::temp_dir()
        .join(format!("address_book_e2e_{}", Uuid::new_v4()))
        .join("addressBook.json");
    let app = startup::build_app(data_file.clone()).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let url = format!("http://{}:{}/addresses", addr.ip(), addr.port());

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(startup::serve(listener, app, async move {
        let _ = stop_rx.await;
    }));

    let res = reqwest::Client::new().post(&url).json(&json!({"name": "Alice"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let _ = stop_tx.send(());
    tokio::time::timeout(std::time::Duration::from_secs(5), server).await???;

    // The completed write is on disk
    let stored: Value = serde_json::from_str(&tokio::fs::read_to_string(&data_file).await?)?;
    assert_eq!(stored, json!([{"name": "Alice", "id": 1}]));
    assert!(reqwest::get(&url).await.is_err());
    Ok(())
}
