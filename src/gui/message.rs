use crate::{
    core::Route,
    gui::screens::{
        ScreenMessage, orphanage_data::OrphanageDataScreen,
        orphanage_details::OrphanageDetailsScreen, orphanages_map::OrphanagesMapScreen,
        select_map_position::SelectMapPositionScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    OrphanagesMap(ScreenMessage<OrphanagesMapScreen>),
    OrphanageDetails(ScreenMessage<OrphanageDetailsScreen>),
    SelectMapPosition(ScreenMessage<SelectMapPositionScreen>),
    OrphanageData(ScreenMessage<OrphanageDataScreen>),
    Navigate(Route),
}
