//! Registration form for a new orphanage.
//!
//! The form is opened for a position chosen on a previous screen and never
//! lets the user change it. Text fields are sent as typed; the server alone
//! decides whether a submission is acceptable.

use std::fmt::Display;

use thiserror::Error;

use crate::{
    config::ClientConfig,
    core::{
        api::OrphanageApi,
        draft::OrphanageDraft,
        media::{MediaPicker, MediaRef, PermissionStatus},
        model::{Position, PositionError},
        navigation::Route,
        payload::MultipartPayload,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the registration form needs a position selected on the map")]
    MissingPosition,
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    PickingImage,
    Submitting { in_flight: usize },
    SubmitFailed { reason: String },
    Submitted,
}

/// Blocking message the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn gallery_access_required() -> Self {
        Self {
            message: "Gallery access is required to attach photos".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    Added,
    Cancelled,
    PermissionDenied,
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    position: Position,
    draft: OrphanageDraft,
    state: FormState,
    alert: Option<Alert>,
    single_flight: bool,
}

impl RegistrationForm {
    pub fn new(position: Option<Position>, config: ClientConfig) -> Result<Self, FormError> {
        let position = position.ok_or(FormError::MissingPosition)?;
        Ok(Self {
            position,
            draft: OrphanageDraft::default(),
            state: FormState::Editing,
            alert: None,
            single_flight: config.single_flight_submit,
        })
    }

    pub fn from_coordinates(
        latitude: f64,
        longitude: f64,
        config: ClientConfig,
    ) -> Result<Self, FormError> {
        Self::new(Some(Position::new(latitude, longitude)?), config)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn draft(&self) -> &OrphanageDraft {
        &self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn previews(&self) -> &[MediaRef] {
        self.draft.images()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_about(&mut self, value: impl Into<String>) {
        self.draft.about = value.into();
    }

    pub fn set_instructions(&mut self, value: impl Into<String>) {
        self.draft.instructions = value.into();
    }

    pub fn set_opening_hours(&mut self, value: impl Into<String>) {
        self.draft.opening_hours = value.into();
    }

    pub fn set_open_on_weekends(&mut self, value: bool) {
        self.draft.open_on_weekends = value;
    }

    /// Enters the picker sub-flow; an in-flight submission keeps its state.
    pub fn begin_pick(&mut self) {
        if !matches!(self.state, FormState::Submitting { .. }) {
            self.state = FormState::PickingImage;
        }
    }

    /// Returns whether the picker should be opened.
    pub fn permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => true,
            PermissionStatus::Denied => {
                tracing::info!("media library permission denied");
                self.alert = Some(Alert::gallery_access_required());
                self.end_pick();
                false
            }
        }
    }

    pub fn pick_result(&mut self, picked: Option<MediaRef>) -> PickResult {
        self.end_pick();
        match picked {
            Some(image) => {
                self.draft.push_image(image);
                PickResult::Added
            }
            None => PickResult::Cancelled,
        }
    }

    fn end_pick(&mut self) {
        if self.state == FormState::PickingImage {
            self.state = FormState::Editing;
        }
    }

    /// Whole picker round trip: permission, then a single pick.
    pub async fn pick_image<P: MediaPicker>(&mut self, picker: &P) -> PickResult {
        self.begin_pick();
        if !self.permission_result(picker.request_permission().await) {
            return PickResult::PermissionDenied;
        }
        self.pick_result(picker.pick().await)
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn submit_enabled(&self) -> bool {
        match self.state {
            FormState::Submitted => false,
            FormState::Submitting { .. } => !self.single_flight,
            _ => true,
        }
    }

    /// Builds the payload for one write request. Every call yields a new
    /// request unless single-flight submission is configured.
    pub fn submit(&mut self) -> Option<MultipartPayload> {
        if !self.submit_enabled() {
            tracing::debug!(state = ?self.state, "submit ignored");
            return None;
        }
        let in_flight = match self.state {
            FormState::Submitting { in_flight } => in_flight + 1,
            _ => 1,
        };
        self.state = FormState::Submitting { in_flight };
        Some(self.draft.to_payload(self.position))
    }

    /// Settles one write request. Returns the route to navigate to on success.
    pub fn finish_submit<E: Display>(&mut self, result: Result<(), E>) -> Option<Route> {
        let remaining = match self.state {
            FormState::Submitting { in_flight } => in_flight.saturating_sub(1),
            FormState::Submitted => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "orphanage_create_failed_after_success");
                }
                return None;
            }
            _ => 0,
        };
        match result {
            Ok(()) => {
                tracing::info!(name = %self.draft.name, "orphanage created");
                self.state = FormState::Submitted;
                Some(Route::OrphanagesMap)
            }
            Err(e) => {
                tracing::warn!(error = %e, "orphanage_create_failed");
                self.state = if remaining > 0 {
                    FormState::Submitting {
                        in_flight: remaining,
                    }
                } else {
                    FormState::SubmitFailed {
                        reason: e.to_string(),
                    }
                };
                None
            }
        }
    }

    /// Submit and wait for the response.
    pub async fn submit_with<A: OrphanageApi>(&mut self, api: &A) -> Option<Route> {
        let payload = self.submit()?;
        let result = api.create_orphanage(payload).await;
        self.finish_submit(result)
    }
}
