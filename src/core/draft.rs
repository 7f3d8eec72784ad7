use crate::core::{
    media::MediaRef,
    model::Position,
    payload::{MultipartPayload, Part},
};

/// Unsaved orphanage registration. Fields are free text and are never
/// validated client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct OrphanageDraft {
    pub name: String,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    images: Vec<MediaRef>,
}

impl Default for OrphanageDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            about: String::new(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            images: Vec::new(),
        }
    }
}

impl OrphanageDraft {
    pub fn images(&self) -> &[MediaRef] {
        &self.images
    }

    /// Images can only be appended.
    pub fn push_image(&mut self, image: MediaRef) {
        self.images.push(image);
    }

    /// Multipart body for `POST orphanages`.
    pub fn to_payload(&self, position: Position) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        payload
            .text("name", &self.name)
            .text("about", &self.about)
            .text("instructions", &self.instructions)
            .text("opening_hours", &self.opening_hours)
            .text("open_on_weekends", self.open_on_weekends.to_string())
            .text("latitude", position.latitude().to_string())
            .text("longitude", position.longitude().to_string());
        for (index, image) in self.images.iter().enumerate() {
            payload.push(Part::image(index, image.clone()));
        }
        payload
    }
}
