//! egui user interface for KunTartib.

pub mod app;

pub use app::{App, StartupArgs, ViewKind};
