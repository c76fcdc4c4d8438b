pub mod config;
pub mod locale;
pub mod sound;
pub mod store;

pub use config::AppConfig;
pub use locale::{Locale, Strings};
pub use sound::{SoundHub, SoundSettings};
pub use store::{Collection, DataStore, UiStateData};
