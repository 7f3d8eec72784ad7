use iced::{
    Element, Length, Task,
    task::Handle,
    widget::{button, column, container, image, row, scrollable, text, text_input, toggler},
};

use crate::{
    core::{MediaPicker, MediaRef, OrphanageApi, PermissionStatus, Route, media::thumbnail},
    gui::{
        AppState, RfdMediaPicker,
        screens::{Screen, ScreenMessage},
    },
    screens::{FormState, RegistrationForm},
};

const PREVIEW_SIZE: u32 = 64;

pub struct OrphanageDataScreen {
    form: RegistrationForm,
    previews: Vec<image::Handle>,
    picker: RfdMediaPicker,
    pick: Option<Handle>,
    submits: Vec<(u64, Handle)>,
    next_submit: u64,
}

#[derive(Debug, Clone)]
pub enum OrphanageDataMessage {
    NameChanged(String),
    AboutChanged(String),
    InstructionsChanged(String),
    OpeningHoursChanged(String),
    OpenOnWeekendsToggled(bool),
    SelectImage,
    PermissionResolved(PermissionStatus),
    ImagePicked(Option<(MediaRef, Option<image::Handle>)>),
    DismissAlert,
    Submit,
    Submitted(u64, Result<(), String>),
}

impl OrphanageDataScreen {
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            previews: Vec::new(),
            picker: RfdMediaPicker,
            pick: None,
            submits: Vec::new(),
            next_submit: 0,
        }
    }

    /// The picker round trip is aborted together with the screen.
    fn track_pick(&mut self, task: Task<ScreenMessage<Self>>) -> Task<ScreenMessage<Self>> {
        let (task, handle) = task.abortable();
        self.pick = Some(handle.abort_on_drop());
        task
    }
}

async fn load_preview(image: MediaRef) -> Option<image::Handle> {
    let decoded = tokio::task::spawn_blocking(move || thumbnail(image.path(), PREVIEW_SIZE)).await;
    match decoded {
        Ok(Ok(thumb)) => Some(image::Handle::from_rgba(
            thumb.width(),
            thumb.height(),
            thumb.into_raw(),
        )),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "could not build image preview");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "preview task failed");
            None
        }
    }
}

fn field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> OrphanageDataMessage,
) -> Element<'a, ScreenMessage<OrphanageDataScreen>> {
    column![
        text(label),
        text_input("", value)
            .on_input(move |v| ScreenMessage::ScreenMessage(on_input(v)))
            .padding(8),
    ]
    .spacing(4)
    .into()
}

impl Screen for OrphanageDataScreen {
    type Message = OrphanageDataMessage;
    type ParentMessage = Route;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        if let Some(alert) = self.form.alert() {
            return container(
                column![
                    text(alert.message.as_str()),
                    button("OK").on_press(ScreenMessage::ScreenMessage(
                        OrphanageDataMessage::DismissAlert
                    )),
                ]
                .spacing(12),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
        }

        let draft = self.form.draft();
        let position = self.form.position();
        let previews = self
            .previews
            .iter()
            .fold(row![].spacing(8), |row, handle| {
                row.push(
                    image(handle.clone())
                        .width(PREVIEW_SIZE as f32)
                        .height(PREVIEW_SIZE as f32),
                )
            });

        let submit_label = match self.form.state() {
            FormState::Submitting { .. } => "Registering...",
            _ => "Register",
        };
        let submit = button(text(submit_label)).width(Length::Fill).on_press_maybe(
            self.form
                .submit_enabled()
                .then_some(ScreenMessage::ScreenMessage(OrphanageDataMessage::Submit)),
        );

        let mut content = column![
            text("Data").size(24),
            text(format!(
                "Position: {:.5}, {:.5}",
                position.latitude(),
                position.longitude()
            )),
            field("Name", &draft.name, OrphanageDataMessage::NameChanged),
            field("About", &draft.about, OrphanageDataMessage::AboutChanged),
            text("Photos"),
            scrollable(previews).direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::default()
            )),
            button(text("+")).on_press(ScreenMessage::ScreenMessage(
                OrphanageDataMessage::SelectImage
            )),
            text("Visiting").size(24),
            field(
                "Instructions",
                &draft.instructions,
                OrphanageDataMessage::InstructionsChanged
            ),
            field(
                "Opening hours",
                &draft.opening_hours,
                OrphanageDataMessage::OpeningHoursChanged
            ),
            toggler(draft.open_on_weekends)
                .label("Open on weekends?")
                .on_toggle(|v| ScreenMessage::ScreenMessage(
                    OrphanageDataMessage::OpenOnWeekendsToggled(v)
                )),
        ]
        .spacing(16)
        .padding(24);

        if let FormState::SubmitFailed { reason } = self.form.state() {
            content = content.push(text(format!("Registration failed: {reason}")));
        }

        scrollable(content.push(submit)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            OrphanageDataMessage::NameChanged(v) => {
                self.form.set_name(v);
                Task::none()
            }
            OrphanageDataMessage::AboutChanged(v) => {
                self.form.set_about(v);
                Task::none()
            }
            OrphanageDataMessage::InstructionsChanged(v) => {
                self.form.set_instructions(v);
                Task::none()
            }
            OrphanageDataMessage::OpeningHoursChanged(v) => {
                self.form.set_opening_hours(v);
                Task::none()
            }
            OrphanageDataMessage::OpenOnWeekendsToggled(v) => {
                self.form.set_open_on_weekends(v);
                Task::none()
            }
            OrphanageDataMessage::SelectImage => {
                self.form.begin_pick();
                let picker = self.picker;
                let task = Task::perform(
                    async move { picker.request_permission().await },
                    |status| {
                        ScreenMessage::ScreenMessage(OrphanageDataMessage::PermissionResolved(
                            status,
                        ))
                    },
                );
                self.track_pick(task)
            }
            OrphanageDataMessage::PermissionResolved(status) => {
                if !self.form.permission_result(status) {
                    self.pick = None;
                    return Task::none();
                }
                let picker = self.picker;
                let task = Task::perform(
                    async move {
                        let image = picker.pick().await?;
                        let preview = load_preview(image.clone()).await;
                        Some((image, preview))
                    },
                    |picked| ScreenMessage::ScreenMessage(OrphanageDataMessage::ImagePicked(picked)),
                );
                self.track_pick(task)
            }
            OrphanageDataMessage::ImagePicked(picked) => {
                self.pick = None;
                match picked {
                    Some((image, Some(preview))) => {
                        self.form.pick_result(Some(image));
                        self.previews.push(preview);
                    }
                    // Only images that can be shown are attached.
                    Some((image, None)) => {
                        tracing::warn!(path = %image.path().display(), "image skipped");
                        self.form.pick_result(None);
                    }
                    None => {
                        self.form.pick_result(None);
                    }
                }
                Task::none()
            }
            OrphanageDataMessage::DismissAlert => {
                self.form.dismiss_alert();
                Task::none()
            }
            OrphanageDataMessage::Submit => {
                let Some(payload) = self.form.submit() else {
                    return Task::none();
                };
                let id = self.next_submit;
                self.next_submit += 1;
                let api = state.api.clone();
                let (task, handle) = Task::perform(
                    async move {
                        api.create_orphanage(payload)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| {
                        ScreenMessage::ScreenMessage(OrphanageDataMessage::Submitted(id, result))
                    },
                )
                .abortable();
                self.submits.push((id, handle.abort_on_drop()));
                task
            }
            OrphanageDataMessage::Submitted(id, result) => {
                self.submits.retain(|(pending, _)| *pending != id);
                match self.form.finish_submit(result) {
                    Some(route) => Task::done(ScreenMessage::ParentMessage(route)),
                    None => Task::none(),
                }
            }
        }
    }
}
