pub mod api;
pub mod draft;
pub mod media;
pub mod model;
pub mod navigation;
pub mod payload;

pub use api::{ApiError, HttpApi, OrphanageApi};
pub use draft::OrphanageDraft;
pub use media::{FileMediaPicker, MediaPicker, MediaRef, PermissionStatus};
pub use model::{Orphanage, OrphanageId, Position, PositionError, Region};
pub use navigation::Route;
pub use payload::{MultipartPayload, Part};
