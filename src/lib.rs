pub mod config;
pub mod core;
pub mod screens;

pub use config::{ApiConfig, ClientConfig};
pub use crate::core::{
    ApiError, HttpApi, MediaPicker, MediaRef, Orphanage, OrphanageApi, OrphanageDraft,
    OrphanageId, Position, Route,
};
pub use screens::{MapBrowser, RegistrationForm};

#[cfg(feature = "gui")]
pub mod gui;
