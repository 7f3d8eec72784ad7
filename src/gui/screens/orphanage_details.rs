use iced::{
    Element, Length, Task,
    widget::{button, column, container, text},
};

use crate::{
    core::{OrphanageId, Route},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

/// Stand-in for the detail view, which lives outside this application.
#[derive(Debug, Clone)]
pub struct OrphanageDetailsScreen {
    id: OrphanageId,
}

#[derive(Debug, Clone)]
pub enum OrphanageDetailsMessage {
    Back,
}

impl OrphanageDetailsScreen {
    pub fn new(id: OrphanageId) -> Self {
        Self { id }
    }
}

impl Screen for OrphanageDetailsScreen {
    type Message = OrphanageDetailsMessage;
    type ParentMessage = Route;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        container(
            column![
                text(format!("Orphanage #{}", self.id)).size(24),
                button("Back to map").on_press(ScreenMessage::ScreenMessage(
                    OrphanageDetailsMessage::Back
                )),
            ]
            .spacing(20),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            OrphanageDetailsMessage::Back => {
                Task::done(ScreenMessage::ParentMessage(Route::OrphanagesMap))
            }
        }
    }
}
