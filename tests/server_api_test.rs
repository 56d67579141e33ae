use anyhow::Result;
use serde_json::{json, Value};
use std::net::SocketAddr;
use timetable_validator::app::serve_with_listener;
use timetable_validator::AppConfig;
use tokio::net::TcpListener;

async fn spawn_server(config: AppConfig) -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(serve_with_listener(
        listener,
        config,
        std::future::pending(),
    ));
    Ok(address)
}

async fn post_validate(address: SocketAddr, body: String) -> Result<(u16, Value)> {
    let response = reqwest::Client::new()
        .post(format!("http://{}/validate", address))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;
    let status = response.status().as_u16();
    let payload: Value = response.json().await?;
    Ok((status, payload))
}

#[tokio::test]
async fn test_smith_jones_schedule_over_http() -> Result<()> {
    let address = spawn_server(AppConfig::default()).await?;

    let body = json!({
        "courses": [
            {"id": 3, "professor": "Smith", "day": "Tue", "time": "10am"},
            {"id": 5, "professor": "Smith", "day": "Tue", "time": "10am"},
            {"id": 7, "professor": "Jones", "day": "Tue", "time": "10am"}
        ]
    });
    let (status, payload) = post_validate(address, body.to_string()).await?;

    assert_eq!(status, 200);
    assert_eq!(
        payload,
        json!({
            "isValid": false,
            "conflicts": [{
                "ids": [3, 5],
                "reason": "Professor Smith is scheduled for multiple courses at the same time."
            }]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_browser_style_payload_is_valid() -> Result<()> {
    let address = spawn_server(AppConfig::default()).await?;

    let body = json!({
        "courses": [
            {"id": "Algebra-1", "name": "Algebra", "professor": "Noether", "day": "Monday", "time": "9-10 AM"},
            {"id": "Optics-2", "name": "Optics", "professor": "Noether", "day": "Monday", "time": "10-11 AM"}
        ]
    });
    let (status, payload) = post_validate(address, body.to_string()).await?;

    assert_eq!(status, 200);
    assert_eq!(payload, json!({"isValid": true, "conflicts": []}));
    Ok(())
}

#[tokio::test]
async fn test_empty_course_list() -> Result<()> {
    let address = spawn_server(AppConfig::default()).await?;
    let (status, payload) = post_validate(address, r#"{"courses": []}"#.to_string()).await?;

    assert_eq!(status, 200);
    assert_eq!(payload, json!({"isValid": true, "conflicts": []}));
    Ok(())
}

#[tokio::test]
async fn test_missing_courses_returns_invalid_input() -> Result<()> {
    let address = spawn_server(AppConfig::default()).await?;

    for body in ["", "{}", r#"{"schedule": []}"#, "not json"] {
        let (status, payload) = post_validate(address, body.to_string()).await?;
        assert_eq!(status, 400, "body {:?}", body);
        assert_eq!(payload, json!({"error": "Invalid input"}));
    }
    Ok(())
}

#[tokio::test]
async fn test_record_missing_professor_is_named() -> Result<()> {
    let address = spawn_server(AppConfig::default()).await?;

    let body = json!({
        "courses": [
            {"id": 1, "professor": "A", "day": "Mon", "time": "9am"},
            {"id": 2, "day": "Mon", "time": "9am"}
        ]
    });
    let (status, payload) = post_validate(address, body.to_string()).await?;

    assert_eq!(status, 400);
    let message = payload["error"].as_str().unwrap_or_default();
    assert!(message.contains("index 1"), "message: {}", message);
    assert!(message.contains("professor"), "message: {}", message);
    Ok(())
}

#[tokio::test]
async fn test_oversized_body_is_rejected() -> Result<()> {
    let mut config = AppConfig::default();
    config.server.max_body_bytes = 64;
    let address = spawn_server(config).await?;

    let courses: Vec<Value> = (0..20)
        .map(|i| json!({"id": i, "professor": "A", "day": "Mon", "time": "9am"}))
        .collect();
    let response = reqwest::Client::new()
        .post(format!("http://{}/validate", address))
        .json(&json!({ "courses": courses }))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 413);
    let payload: Value = response.json().await?;
    let message = payload["error"].as_str().unwrap_or_default();
    assert!(message.contains("length limit"), "payload: {}", payload);
    Ok(())
}

#[tokio::test]
async fn test_landing_page_and_health() -> Result<()> {
    let address = spawn_server(AppConfig::default()).await?;
    let client = reqwest::Client::new();

    let page = client.get(format!("http://{}/", address)).send().await?;
    assert_eq!(page.status().as_u16(), 200);
    assert!(page.text().await?.contains("Timetable Validator"));

    let script = client
        .get(format!("http://{}/static/script.js", address))
        .send()
        .await?;
    assert_eq!(script.status().as_u16(), 200);

    let health: Value = client
        .get(format!("http://{}/health", address))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health, json!({"status": "ok"}));
    Ok(())
}
