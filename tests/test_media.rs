mod common;

use orphanage_map::core::{FileMediaPicker, media::thumbnail};

use common::*;

#[test]
fn test_thumbnail_is_square() -> anyhow::Result<()> {
    let img_file = create_test_image();

    let thumb = thumbnail(img_file.path(), 64)?;

    assert_eq!(thumb.width(), 64);
    assert_eq!(thumb.height(), 64);
    let pixel = thumb.get_pixel(32, 32);
    assert!(pixel[0] > 200 && pixel[1] < 60, "expected red, got {pixel:?}");

    Ok(())
}

#[test]
fn test_thumbnail_of_missing_file_fails() {
    assert!(thumbnail(std::path::Path::new("/no/such/image.jpg"), 64).is_err());
}

#[tokio::test]
async fn test_file_picker_yields_paths_in_order() -> anyhow::Result<()> {
    let first = create_test_image();
    let second = create_test_image();
    let picker = FileMediaPicker::new([first.path().to_path_buf(), second.path().to_path_buf()]);

    assert_eq!(picker.request_permission().await, PermissionStatus::Granted);
    assert_eq!(picker.pick().await, Some(MediaRef::new(first.path())));
    assert_eq!(picker.pick().await, Some(MediaRef::new(second.path())));
    assert_eq!(picker.pick().await, None, "exhausted picker behaves like a cancel");

    Ok(())
}

#[tokio::test]
async fn test_file_picker_skips_missing_files() -> anyhow::Result<()> {
    let picker = FileMediaPicker::new([std::path::PathBuf::from("/no/such/image.jpg")]);
    let mut form = sample_form(ClientConfig::default());

    assert_eq!(form.pick_image(&picker).await, PickResult::Cancelled);
    assert!(form.previews().is_empty());

    Ok(())
}
