use iced::{Element, Task};

use crate::{
    config::{ApiConfig, ClientConfig},
    core::{HttpApi, Route},
    gui::{
        AppState, Message,
        screens::{
            Screen, ScreenData, ScreenMessage,
            orphanage_data::OrphanageDataScreen,
            orphanage_details::OrphanageDetailsScreen,
            orphanages_map::{OrphanagesMapMessage, OrphanagesMapScreen},
            select_map_position::SelectMapPositionScreen,
        },
    },
    screens::{MapBrowser, RegistrationForm},
};

pub struct OrphanageMapApp {
    state: AppState,
    map: OrphanagesMapScreen,
    screen: ScreenData,
}

/// Opens the desktop application on the current thread.
pub fn run(api: ApiConfig, client: ClientConfig) -> anyhow::Result<()> {
    let state = AppState {
        api: HttpApi::new(&api)?,
        client,
    };
    iced::application(
        move || OrphanageMapApp::new(state.clone()),
        OrphanageMapApp::update,
        OrphanageMapApp::view,
    )
    .title(OrphanageMapApp::title)
    .run()?;
    Ok(())
}

fn forward<S: Screen<ParentMessage = Route> + 'static>(
    task: Task<ScreenMessage<S>>,
    wrap: fn(ScreenMessage<S>) -> Message,
) -> Task<Message> {
    task.map(move |msg| match msg {
        ScreenMessage::ParentMessage(route) => Message::Navigate(route),
        msg => wrap(msg),
    })
}

impl OrphanageMapApp {
    pub fn new(state: AppState) -> (Self, Task<Message>) {
        let map = OrphanagesMapScreen::new(MapBrowser::new(state.client));
        let mut app = Self {
            state,
            map,
            screen: ScreenData::OrphanagesMap,
        };
        let task = app.focus_map();
        (app, task)
    }

    pub fn title(&self) -> String {
        "Orphanage Map".to_string()
    }

    fn focus_map(&mut self) -> Task<Message> {
        forward(
            self.map
                .update(OrphanagesMapMessage::Focused, &mut self.state),
            Message::OrphanagesMap,
        )
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::debug!(?route, "navigate");
        match route {
            Route::OrphanagesMap => {
                self.screen = ScreenData::OrphanagesMap;
                return self.focus_map();
            }
            Route::OrphanageDetails { id } => {
                self.screen = ScreenData::OrphanageDetails(OrphanageDetailsScreen::new(id));
            }
            Route::SelectMapPosition => {
                self.screen = ScreenData::SelectMapPosition(SelectMapPositionScreen::default());
            }
            Route::OrphanageData { position } => {
                match RegistrationForm::new(Some(position), self.state.client) {
                    Ok(form) => {
                        self.screen = ScreenData::OrphanageData(OrphanageDataScreen::new(form));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "cannot open registration form");
                        return Task::none();
                    }
                }
            }
        }
        self.map.blur();
        Task::none()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let message = match message {
            Message::Navigate(route) => return self.navigate(route),
            message => message,
        };
        match (&mut self.screen, message) {
            (_, Message::OrphanagesMap(ScreenMessage::ScreenMessage(msg))) => forward(
                self.map.update(msg, &mut self.state),
                Message::OrphanagesMap,
            ),
            (
                ScreenData::OrphanageDetails(page),
                Message::OrphanageDetails(ScreenMessage::ScreenMessage(msg)),
            ) => forward(
                page.update(msg, &mut self.state),
                Message::OrphanageDetails,
            ),
            (
                ScreenData::SelectMapPosition(page),
                Message::SelectMapPosition(ScreenMessage::ScreenMessage(msg)),
            ) => forward(
                page.update(msg, &mut self.state),
                Message::SelectMapPosition,
            ),
            (
                ScreenData::OrphanageData(page),
                Message::OrphanageData(ScreenMessage::ScreenMessage(msg)),
            ) => forward(page.update(msg, &mut self.state), Message::OrphanageData),
            // Results for a screen that is no longer shown.
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            ScreenData::OrphanagesMap => self.map.view().map(Message::OrphanagesMap),
            ScreenData::OrphanageDetails(page) => page.view().map(Message::OrphanageDetails),
            ScreenData::SelectMapPosition(page) => page.view().map(Message::SelectMapPosition),
            ScreenData::OrphanageData(page) => page.view().map(Message::OrphanageData),
        }
    }
}
