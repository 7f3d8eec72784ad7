use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use image::{ImageBuffer, Rgb};
use orphanage_map::core::{
    ApiError, MediaPicker, MediaRef, MultipartPayload, Orphanage, OrphanageApi, OrphanageId,
    PermissionStatus,
};
use reqwest::StatusCode;
use tempfile::NamedTempFile;

/// Creates a 100x100 red JPEG and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Jpeg)
        .expect("Failed to save test image");
    file
}

pub fn orphanage(id: i64, name: &str, latitude: f64, longitude: f64) -> Orphanage {
    Orphanage {
        id: OrphanageId(id),
        name: name.to_string(),
        latitude,
        longitude,
    }
}

pub fn server_error(body: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: body.to_string(),
    }
}

/// In-memory API. List responses are served in queue order; an exhausted
/// queue answers with an empty list.
#[derive(Default)]
pub struct FakeApi {
    list_responses: Mutex<VecDeque<Result<Vec<Orphanage>, String>>>,
    create_failure: Mutex<Option<String>>,
    created: Mutex<Vec<MultipartPayload>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_lists(responses: impl IntoIterator<Item = Result<Vec<Orphanage>, String>>) -> Self {
        Self {
            list_responses: Mutex::new(responses.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn failing_create(reason: &str) -> Self {
        Self {
            create_failure: Mutex::new(Some(reason.to_string())),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<MultipartPayload> {
        self.created.lock().unwrap().clone()
    }
}

impl OrphanageApi for FakeApi {
    async fn list_orphanages(&self) -> Result<Vec<Orphanage>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.list_responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(list)) => Ok(list),
            Some(Err(body)) => Err(server_error(&body)),
            None => Ok(Vec::new()),
        }
    }

    async fn create_orphanage(&self, payload: MultipartPayload) -> Result<(), ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(payload);
        let failure = self.create_failure.lock().unwrap().clone();
        match failure {
            Some(body) => Err(server_error(&body)),
            None => Ok(()),
        }
    }
}

/// Media picker with a fixed permission answer and a queue of picks
/// (`None` entries are cancellations).
pub struct FakeMediaPicker {
    permission: PermissionStatus,
    picks: Mutex<VecDeque<Option<MediaRef>>>,
    permission_requests: AtomicUsize,
    pick_calls: AtomicUsize,
}

impl FakeMediaPicker {
    pub fn new(permission: PermissionStatus, picks: Vec<Option<&str>>) -> Self {
        Self {
            permission,
            picks: Mutex::new(picks.into_iter().map(|p| p.map(MediaRef::new)).collect()),
            permission_requests: AtomicUsize::new(0),
            pick_calls: AtomicUsize::new(0),
        }
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn pick_calls(&self) -> usize {
        self.pick_calls.load(Ordering::SeqCst)
    }
}

impl MediaPicker for FakeMediaPicker {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.permission
    }

    async fn pick(&self) -> Option<MediaRef> {
        self.pick_calls.fetch_add(1, Ordering::SeqCst);
        self.picks.lock().unwrap().pop_front().flatten()
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: axum::Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Ok(format!("http://{addr}"))
}

/// Registration form at the position used throughout the tests.
pub fn sample_form(config: orphanage_map::ClientConfig) -> orphanage_map::RegistrationForm {
    orphanage_map::RegistrationForm::from_coordinates(-21.6, -48.3, config)
        .expect("sample position is valid")
}
