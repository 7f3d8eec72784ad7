use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::{
    core::{Position, Region, Route},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

/// Minimal position picker: coordinates are typed in, starting from the
/// center of the default map region.
#[derive(Debug, Clone)]
pub struct SelectMapPositionScreen {
    latitude: String,
    longitude: String,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SelectMapPositionMessage {
    LatitudeChanged(String),
    LongitudeChanged(String),
    Next,
    Cancel,
}

impl Default for SelectMapPositionScreen {
    fn default() -> Self {
        Self {
            latitude: Region::DEFAULT_LATITUDE.to_string(),
            longitude: Region::DEFAULT_LONGITUDE.to_string(),
            error: None,
        }
    }
}

impl SelectMapPositionScreen {
    fn position(&self) -> Result<Position, String> {
        let latitude: f64 = self
            .latitude
            .trim()
            .parse()
            .map_err(|_| format!("`{}` is not a latitude", self.latitude))?;
        let longitude: f64 = self
            .longitude
            .trim()
            .parse()
            .map_err(|_| format!("`{}` is not a longitude", self.longitude))?;
        Position::new(latitude, longitude).map_err(|e| e.to_string())
    }
}

impl Screen for SelectMapPositionScreen {
    type Message = SelectMapPositionMessage;
    type ParentMessage = Route;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Select the position of the orphanage").size(24),
            text_input("Latitude", &self.latitude).on_input(|v| ScreenMessage::ScreenMessage(
                SelectMapPositionMessage::LatitudeChanged(v)
            )),
            text_input("Longitude", &self.longitude).on_input(|v| ScreenMessage::ScreenMessage(
                SelectMapPositionMessage::LongitudeChanged(v)
            )),
            row![
                button("Cancel").on_press(ScreenMessage::ScreenMessage(
                    SelectMapPositionMessage::Cancel
                )),
                button("Next").on_press(ScreenMessage::ScreenMessage(
                    SelectMapPositionMessage::Next
                )),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(24)
        .max_width(480);
        if let Some(error) = &self.error {
            content = content.push(text(error.as_str()));
        }
        container(content)
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
            SelectMapPositionMessage::LatitudeChanged(v) => {
                self.latitude = v;
                Task::none()
            }
            SelectMapPositionMessage::LongitudeChanged(v) => {
                self.longitude = v;
                Task::none()
            }
            SelectMapPositionMessage::Next => match self.position() {
                Ok(position) => Task::done(ScreenMessage::ParentMessage(Route::OrphanageData {
                    position,
                })),
                Err(e) => {
                    self.error = Some(e);
                    Task::none()
                }
            },
            SelectMapPositionMessage::Cancel => {
                Task::done(ScreenMessage::ParentMessage(Route::OrphanagesMap))
            }
        }
    }
}
