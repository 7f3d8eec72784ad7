use crate::core::model::{OrphanageId, Position};

/// Destinations the host navigator understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    OrphanagesMap,
    OrphanageDetails { id: OrphanageId },
    SelectMapPosition,
    OrphanageData { position: Position },
}
