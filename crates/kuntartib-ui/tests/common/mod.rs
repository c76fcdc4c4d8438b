use std::sync::Mutex;

use egui_kittest::Harness;
use tempfile::TempDir;

use kuntartib_ui::{App, StartupArgs};

/// Serializes harness creation so the data-dir env var can't race.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Creates a standard test harness with the app at 1024x768.
///
/// Each harness gets its own temporary data directory so tests never see
/// each other's persisted boards. Keep the returned `TempDir` alive for
/// the duration of the test.
pub fn create_harness() -> (Harness<'static, App>, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let harness = {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("KUNTARTIB_DATA_DIR", dir.path());
        Harness::builder()
            .with_size(egui::Vec2::new(1024.0, 768.0))
            .build_eframe(|cc| App::new(cc, StartupArgs::default()))
    };
    (harness, dir)
}
