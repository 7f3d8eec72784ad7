pub mod orphanage_data;
pub mod orphanages_map;

pub use orphanage_data::{Alert, FormError, FormState, PickResult, RegistrationForm};
pub use orphanages_map::{FetchOutcome, FetchTicket, MapBrowser, Marker, fetch_orphanages};
