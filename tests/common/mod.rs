mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from orphanage_map for tests
pub use orphanage_map::{
    ApiConfig, ClientConfig,
    core::{
        ApiError, HttpApi, MediaPicker, MediaRef, MultipartPayload, Orphanage, OrphanageApi,
        OrphanageId, Part, PermissionStatus, Position, Route,
    },
    screens::{
        FetchOutcome, FormError, FormState, MapBrowser, PickResult, RegistrationForm,
        fetch_orphanages,
    },
};
