//! HTTP client against an in-process server.

mod common;

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};

use common::*;

#[derive(Debug, Clone, PartialEq)]
struct ReceivedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

type Received = Arc<Mutex<Vec<Vec<ReceivedPart>>>>;

async fn list_handler() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "Lar Esperança", "latitude": -21.6119, "longitude": -48.3647,
          "about": "ignored", "images": [] },
        { "id": 2, "name": "Casa do Sol", "latitude": -21.6120, "longitude": -48.3650 }
    ]))
}

async fn create_handler(
    State(received): State<Received>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }
    received.lock().unwrap().push(parts);
    (StatusCode::CREATED, Json(json!({ "id": 3 })))
}

async fn spawn_directory() -> anyhow::Result<(String, Received)> {
    let received: Received = Arc::default();
    let router = Router::new()
        .route("/orphanages", get(list_handler).post(create_handler))
        .with_state(received.clone());
    Ok((spawn_server(router).await?, received))
}

fn api_for(base_url: String) -> anyhow::Result<HttpApi> {
    Ok(HttpApi::new(&ApiConfig {
        base_url,
        timeout: None,
    })?)
}

#[tokio::test]
async fn test_list_orphanages_ignores_extra_fields() -> anyhow::Result<()> {
    let (base_url, _) = spawn_directory().await?;
    let api = api_for(base_url)?;

    let orphanages = api.list_orphanages().await?;

    assert_eq!(orphanages.len(), 2);
    assert_eq!(orphanages[0], orphanage(1, "Lar Esperança", -21.6119, -48.3647));
    assert_eq!(orphanages[1].name, "Casa do Sol");

    Ok(())
}

#[tokio::test]
async fn test_base_url_with_path_prefix() -> anyhow::Result<()> {
    let router = Router::new().route("/api/orphanages", get(list_handler));
    let base_url = spawn_server(router).await?;
    let api = api_for(format!("{base_url}/api"))?;

    assert_eq!(api.list_orphanages().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_form_submission_wire_format() -> anyhow::Result<()> {
    let (base_url, received) = spawn_directory().await?;
    let api = api_for(base_url)?;
    let front = create_test_image();
    let yard = create_test_image();

    let mut form = sample_form(ClientConfig::default());
    form.set_name("Abrigo Sol");
    form.set_about("desc");
    form.set_instructions("9-5");
    form.set_opening_hours("Mon-Fri");
    form.set_open_on_weekends(false);
    let picker = FakeMediaPicker::new(
        PermissionStatus::Granted,
        vec![front.path().to_str(), yard.path().to_str()],
    );
    form.pick_image(&picker).await;
    form.pick_image(&picker).await;

    assert_eq!(form.submit_with(&api).await, Some(Route::OrphanagesMap));

    let requests = received.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let parts = &requests[0];

    let scalars: Vec<(&str, String)> = parts
        .iter()
        .filter(|p| p.file_name.is_none())
        .map(|p| (p.name.as_str(), String::from_utf8_lossy(&p.bytes).into_owned()))
        .collect();
    assert_eq!(scalars.len(), 7);
    assert!(scalars.contains(&("open_on_weekends", "false".to_string())));
    assert!(scalars.contains(&("latitude", "-21.6".to_string())));
    assert!(scalars.contains(&("longitude", "-48.3".to_string())));

    let images: Vec<&ReceivedPart> = parts.iter().filter(|p| p.file_name.is_some()).collect();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].name, "images");
    assert_eq!(images[0].file_name.as_deref(), Some("image_0.jpg"));
    assert_eq!(images[1].file_name.as_deref(), Some("image_1.jpg"));
    assert_eq!(images[0].content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(images[0].bytes, std::fs::read(front.path())?);

    Ok(())
}

#[tokio::test]
async fn test_rejected_submission_reports_status() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/orphanages",
        get(list_handler).post(|| async { (StatusCode::BAD_REQUEST, "name is required") }),
    );
    let api = api_for(spawn_server(router).await?)?;
    let mut form = sample_form(ClientConfig::default());

    assert_eq!(form.submit_with(&api).await, None);

    match form.state() {
        FormState::SubmitFailed { reason } => {
            assert!(reason.contains("400"), "reason was {reason}");
            assert!(reason.contains("name is required"));
        }
        other => panic!("unexpected state {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_unreadable_image_fails_before_sending() -> anyhow::Result<()> {
    let (base_url, received) = spawn_directory().await?;
    let api = api_for(base_url)?;
    let mut payload = MultipartPayload::new();
    payload.push(Part::image(0, MediaRef::new("/definitely/missing.jpg")));

    let err = api.create_orphanage(payload).await.unwrap_err();

    assert!(matches!(err, ApiError::ReadImage { .. }));
    assert!(received.lock().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_configured_timeout_applies() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/orphanages",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    );
    let api = HttpApi::new(&ApiConfig {
        base_url: spawn_server(router).await?,
        timeout: Some(Duration::from_millis(200)),
    })?;

    let err = api.list_orphanages().await.unwrap_err();

    assert!(matches!(&err, ApiError::Request(e) if e.is_timeout()), "got {err}");

    Ok(())
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = HttpApi::new(&ApiConfig {
        base_url: "not a url".to_string(),
        timeout: None,
    });
    assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
}
