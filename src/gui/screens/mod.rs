pub mod orphanage_data;
pub mod orphanage_details;
pub mod orphanages_map;
pub mod select_map_position;

use std::fmt;

use iced::{Element, Task};

use crate::gui::AppState;

pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Screen> Clone for ScreenMessage<S> {
    fn clone(&self) -> Self {
        match self {
            Self::ScreenMessage(msg) => Self::ScreenMessage(msg.clone()),
            Self::ParentMessage(msg) => Self::ParentMessage(msg.clone()),
        }
    }
}

impl<S: Screen> fmt::Debug for ScreenMessage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScreenMessage(msg) => f.debug_tuple("ScreenMessage").field(msg).finish(),
            Self::ParentMessage(msg) => f.debug_tuple("ParentMessage").field(msg).finish(),
        }
    }
}

pub trait Screen: Sized {
    type Message: fmt::Debug + Clone + Send + 'static;
    type ParentMessage: fmt::Debug + Clone + Send + 'static;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// Screen currently on top of the map. The map itself stays mounted.
pub enum ScreenData {
    OrphanagesMap,
    OrphanageDetails(orphanage_details::OrphanageDetailsScreen),
    SelectMapPosition(select_map_position::SelectMapPositionScreen),
    OrphanageData(orphanage_data::OrphanageDataScreen),
}
