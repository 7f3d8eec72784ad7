mod app;
mod message;
mod picker;
mod screens;
mod state;
mod widgets;

pub use app::{OrphanageMapApp, run};
pub use message::Message;
pub use picker::RfdMediaPicker;
pub use state::AppState;
