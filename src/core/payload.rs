use reqwest::multipart::{Form, Part as FormPart};

use crate::core::{api::ApiError, media::MediaRef};

pub const IMAGES_FIELD: &str = "images";
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// One part of a multipart body. File parts reference the image on disk and
/// are only read when the payload is turned into a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: &'static str,
        source: MediaRef,
    },
}

impl Part {
    /// Image part with the synthetic `image_<index>.jpg` filename.
    pub fn image(index: usize, source: MediaRef) -> Self {
        Part::File {
            name: IMAGES_FIELD.to_string(),
            file_name: format!("image_{index}.jpg"),
            content_type: IMAGE_CONTENT_TYPE,
            source,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    parts: Vec<Part>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn push(&mut self, part: Part) -> &mut Self {
        self.parts.push(part);
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn text_parts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().filter_map(|part| match part {
            Part::Text { name, value } => Some((name.as_str(), value.as_str())),
            Part::File { .. } => None,
        })
    }

    /// First text value stored under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.text_parts()
            .find(|(part_name, _)| *part_name == name)
            .map(|(_, value)| value)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::File { file_name, .. } => Some(file_name.as_str()),
            Part::Text { .. } => None,
        })
    }

    /// Reads every referenced image and builds the request body.
    pub async fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for part in self.parts {
            form = match part {
                Part::Text { name, value } => form.text(name, value),
                Part::File {
                    name,
                    file_name,
                    content_type,
                    source,
                } => {
                    let bytes = tokio::fs::read(source.path()).await.map_err(|source_err| {
                        ApiError::ReadImage {
                            path: source.path().to_path_buf(),
                            source: source_err,
                        }
                    })?;
                    let part = FormPart::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(content_type)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
