use std::{
    collections::VecDeque,
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use image::{RgbaImage, imageops::FilterType};

/// Reference to a locally selected image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(PathBuf);

impl MediaRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Device media library: a permission gate followed by a single-image pick.
pub trait MediaPicker {
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;
    /// `None` when the user cancels.
    fn pick(&self) -> impl Future<Output = Option<MediaRef>> + Send;
}

/// Picker fed from a fixed list of paths, used by the command line front-end.
/// Each pick consumes the next path; an exhausted queue behaves like a cancel.
#[derive(Debug, Default)]
pub struct FileMediaPicker {
    queue: Mutex<VecDeque<PathBuf>>,
}

impl FileMediaPicker {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            queue: Mutex::new(paths.into_iter().collect()),
        }
    }

    fn next_path(&self) -> Option<PathBuf> {
        self.queue.lock().ok()?.front().cloned()
    }

    fn pop_path(&self) -> Option<PathBuf> {
        self.queue.lock().ok()?.pop_front()
    }
}

impl MediaPicker for FileMediaPicker {
    async fn request_permission(&self) -> PermissionStatus {
        let Some(path) = self.next_path() else {
            return PermissionStatus::Granted;
        };
        match tokio::fs::File::open(&path).await {
            Err(e) if e.kind() == ErrorKind::PermissionDenied => PermissionStatus::Denied,
            _ => PermissionStatus::Granted,
        }
    }

    async fn pick(&self) -> Option<MediaRef> {
        let path = self.pop_path()?;
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!(path = %path.display(), "picked image does not exist");
            return None;
        }
        Some(MediaRef::new(path))
    }
}

/// Square preview of an image, cropped to fill `size` x `size`.
pub fn thumbnail(path: &Path, size: u32) -> image::ImageResult<RgbaImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    Ok(img.resize_to_fill(size, size, FilterType::Triangle).to_rgba8())
}
