/// Shared audio-feedback settings.
///
/// One `SoundHub` instance is created by the app and handed to every
/// consumer that needs the chime settings, instead of a module-level
/// global. Listeners register to react when the settings change.
use serde::{Deserialize, Serialize};

/// Chime settings for pomodoro phase changes and fired reminders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    /// Whether chimes play at all.
    pub enabled: bool,
    /// Volume in 0.0..=1.0.
    pub volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.7,
        }
    }
}

impl SoundSettings {
    /// Clamps the volume into range.
    pub fn sanitize(&mut self) {
        self.volume = self.volume.clamp(0.0, 1.0);
    }
}

/// Listener invoked after every settings change.
type Listener = Box<dyn Fn(&SoundSettings)>;

/// Holder for the shared sound settings with change notification.
pub struct SoundHub {
    settings: SoundSettings,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for SoundHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundHub")
            .field("settings", &self.settings)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for SoundHub {
    fn default() -> Self {
        Self::new(SoundSettings::default())
    }
}

impl SoundHub {
    /// Creates a hub with the given initial settings.
    pub fn new(mut settings: SoundSettings) -> Self {
        settings.sanitize();
        Self {
            settings,
            listeners: Vec::new(),
        }
    }

    /// The current settings.
    pub fn settings(&self) -> SoundSettings {
        self.settings
    }

    /// Mutates the settings and notifies all listeners.
    pub fn update(&mut self, mutate: impl FnOnce(&mut SoundSettings)) {
        mutate(&mut self.settings);
        self.settings.sanitize();
        for listener in &self.listeners {
            listener(&self.settings);
        }
    }

    /// Registers a listener called after each change.
    pub fn subscribe(&mut self, listener: impl Fn(&SoundSettings) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Effective volume: 0.0 when disabled.
    pub fn effective_volume(&self) -> f32 {
        if self.settings.enabled {
            self.settings.volume
        } else {
            0.0
        }
    }
}
