use iced::{
    Alignment::Center,
    Element, Length, Task,
    task::Handle,
    widget::{button, column, container, row, scrollable, text},
};

use crate::{
    core::{Orphanage, OrphanageId, Route},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{MapCanvas, layout},
    },
    screens::{FetchTicket, MapBrowser, fetch_orphanages},
};

pub struct OrphanagesMapScreen {
    browser: MapBrowser,
    fetches: Vec<(FetchTicket, Handle)>,
}

#[derive(Debug, Clone)]
pub enum OrphanagesMapMessage {
    Focused,
    Loaded(FetchTicket, Result<Vec<Orphanage>, String>),
    SelectMarker(OrphanageId),
    CloseCallout,
    OpenDetails,
    CreateOrphanage,
}

impl OrphanagesMapScreen {
    pub fn new(browser: MapBrowser) -> Self {
        Self {
            browser,
            fetches: Vec::new(),
        }
    }

    /// Leaving the screen aborts reads that have not settled yet.
    pub fn blur(&mut self) {
        self.fetches.clear();
    }
}

impl Screen for OrphanagesMapScreen {
    type Message = OrphanagesMapMessage;
    type ParentMessage = Route;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let markers = self.browser.markers();
        let selected = self.browser.callout().map(|o| o.id);

        let marker_list = markers.iter().fold(column![].spacing(4), |col, marker| {
            col.push(
                button(text(marker.name.to_string()))
                    .width(Length::Fill)
                    .on_press(ScreenMessage::ScreenMessage(
                        OrphanagesMapMessage::SelectMarker(marker.id),
                    )),
            )
        });

        let callout: Element<'_, ScreenMessage<Self>> = match self.browser.callout() {
            Some(orphanage) => row![
                button(text(orphanage.name.as_str())).on_press(ScreenMessage::ScreenMessage(
                    OrphanagesMapMessage::OpenDetails
                )),
                button("x").on_press(ScreenMessage::ScreenMessage(
                    OrphanagesMapMessage::CloseCallout
                )),
            ]
            .spacing(8)
            .into(),
            None => text("Select a marker").into(),
        };

        let mut sidebar = column![scrollable(marker_list).height(Length::Fill), callout]
            .spacing(12)
            .padding(12);
        if let Some(error) = self.browser.last_error() {
            sidebar = sidebar.push(text(format!("Could not load orphanages: {error}")));
        }

        let footer = row![
            text(self.browser.footer_text()).width(Length::Fill),
            button(text("+").size(20)).on_press(ScreenMessage::ScreenMessage(
                OrphanagesMapMessage::CreateOrphanage
            )),
        ]
        .padding(12)
        .align_y(Center);

        let map = MapCanvas::new(self.browser.region(), &markers, selected);
        layout(sidebar, column![map.view(), container(footer)])
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            OrphanagesMapMessage::Focused => {
                let ticket = self.browser.focus();
                let api = state.api.clone();
                let (task, handle) = Task::perform(
                    async move {
                        let (ticket, result) = fetch_orphanages(&api, ticket).await;
                        (ticket, result.map_err(|e| e.to_string()))
                    },
                    |(ticket, result)| {
                        ScreenMessage::ScreenMessage(OrphanagesMapMessage::Loaded(ticket, result))
                    },
                )
                .abortable();
                self.fetches.push((ticket, handle.abort_on_drop()));
                task
            }
            OrphanagesMapMessage::Loaded(ticket, result) => {
                self.fetches.retain(|(pending, _)| *pending != ticket);
                self.browser.apply_fetch(ticket, result);
                Task::none()
            }
            OrphanagesMapMessage::SelectMarker(id) => {
                self.browser.select_marker(id);
                Task::none()
            }
            OrphanagesMapMessage::CloseCallout => {
                self.browser.close_callout();
                Task::none()
            }
            OrphanagesMapMessage::OpenDetails => match self.browser.press_callout() {
                Some(route) => Task::done(ScreenMessage::ParentMessage(route)),
                None => Task::none(),
            },
            OrphanagesMapMessage::CreateOrphanage => Task::done(ScreenMessage::ParentMessage(
                self.browser.create_orphanage(),
            )),
        }
    }
}
