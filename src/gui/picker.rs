use rfd::AsyncFileDialog;

use crate::core::{MediaPicker, MediaRef, PermissionStatus};

/// Desktop media picker backed by the native file dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdMediaPicker;

impl MediaPicker for RfdMediaPicker {
    // Desktop file dialogs are not permission gated.
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn pick(&self) -> Option<MediaRef> {
        AsyncFileDialog::new()
            .set_title("Select a photo")
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file()
            .await
            .map(|handle| MediaRef::new(handle.path()))
    }
}
