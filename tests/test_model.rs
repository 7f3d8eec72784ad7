mod common;

use orphanage_map::core::{PositionError, Region};

use common::*;

#[test]
fn test_position_bounds() {
    assert!(Position::new(-21.6, -48.3).is_ok());
    assert!(Position::new(90.0, 180.0).is_ok());
    assert_eq!(
        Position::new(90.5, 0.0),
        Err(PositionError::LatitudeOutOfRange)
    );
    assert_eq!(
        Position::new(0.0, -180.5),
        Err(PositionError::LongitudeOutOfRange)
    );
    assert_eq!(Position::new(f64::NAN, 0.0), Err(PositionError::NonFinite));
}

#[test]
fn test_default_region_projection() -> anyhow::Result<()> {
    let region = Region::default();

    let (x, y) = region
        .project(region.center)
        .expect("center is inside the region");
    assert!((x - 0.5).abs() < 1e-9);
    assert!((y - 0.5).abs() < 1e-9);

    // North-west of the center lands in the upper-left quadrant.
    let north_west = Position::new(
        Region::DEFAULT_LATITUDE + 0.002,
        Region::DEFAULT_LONGITUDE - 0.002,
    )?;
    let (x, y) = region.project(north_west).expect("inside the region");
    assert!(x < 0.5 && y < 0.5);

    let far_away = Position::new(0.0, 0.0)?;
    assert_eq!(region.project(far_away), None);

    Ok(())
}

#[test]
fn test_orphanage_deserializes_from_api_json() -> anyhow::Result<()> {
    let json = r#"{"id": 5, "name": "Lar", "latitude": -21.6, "longitude": -48.3, "about": "x"}"#;
    let parsed: Orphanage = serde_json::from_str(json)?;

    assert_eq!(parsed.id, OrphanageId(5));
    assert_eq!(parsed.position()?, Position::new(-21.6, -48.3)?);

    Ok(())
}
