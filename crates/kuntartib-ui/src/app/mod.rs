//! Top-level application tying together views, menus, and the status bar.

mod board_view;
mod menu_bar;
mod pomodoro_view;
mod settings_dialog;
mod shortcuts;
mod status_bar;
mod task_ops;
mod tasks_view;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui;

use kuntartib_config::store::resolve_data_dir;
use kuntartib_config::{
    AppConfig, Collection, DataStore, Locale, SoundHub, SoundSettings, Strings, UiStateData,
};
use kuntartib_core::{
    Board, FocusTally, PhaseEvent, PomodoroSettings, PomodoroTimer, Reminder, ReminderLedger,
    SnapshotHistory, Task,
};
use kuntartib_mod_history::HistoryConfig;

/// How long the chime indicator stays visible in the status bar.
const CHIME_FLASH_SECS: u64 = 3;

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// If set, create a task with this title on startup.
    pub new_task: Option<String>,
}

/// Which color theme to use.
///
/// Wraps a string name. Valid values: `"System"`, `"Dark"`, `"Light"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMode(pub String);

impl Default for ThemeMode {
    fn default() -> Self {
        Self::system()
    }
}

impl ThemeMode {
    pub fn system() -> Self {
        Self("System".to_string())
    }

    pub fn dark() -> Self {
        Self("Dark".to_string())
    }

    pub fn light() -> Self {
        Self("Light".to_string())
    }

    /// Returns true if this is the "System" mode.
    pub fn is_system(&self) -> bool {
        self.0 == "System"
    }

    /// Resolves "System" to a concrete theme name using the OS preference.
    pub fn resolve(&self) -> &str {
        if self.is_system() {
            match dark_light::detect() {
                Ok(dark_light::Mode::Light) => "Light",
                _ => "Dark",
            }
        } else {
            &self.0
        }
    }
}

/// The three main screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Tasks,
    Board,
    Pomodoro,
}

impl ViewKind {
    /// The persisted key for this view.
    pub fn key(self) -> &'static str {
        match self {
            ViewKind::Tasks => "tasks",
            ViewKind::Board => "board",
            ViewKind::Pomodoro => "pomodoro",
        }
    }

    /// Parses a persisted key, `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tasks" => Some(ViewKind::Tasks),
            "board" => Some(ViewKind::Board),
            "pomodoro" => Some(ViewKind::Pomodoro),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) enum DialogState {
    #[default]
    None,
    ConfirmDelete(String),
}

/// The main application state.
pub struct App {
    pub board: Board,
    pub history: SnapshotHistory,
    pub pomodoro: PomodoroTimer,
    pub tally: FocusTally,
    reminders: ReminderLedger,
    pub active_reminders: Vec<Reminder>,
    store: Option<DataStore>,
    pub locale: Locale,
    pub theme_mode: ThemeMode,
    pub show_completed_tasks: bool,
    pub sound: SoundHub,
    pub history_depth: usize,
    pub reminder_lead_minutes: i64,
    pub active_view: ViewKind,
    /// Which open task the current focus session counts toward.
    pub focus_task_id: Option<String>,
    pub new_task_text: String,
    pub(crate) request_input_focus: bool,
    pub(crate) title_edit_dirty: bool,
    config_path: PathBuf,
    last_frame: Instant,
    last_reminder_poll: Instant,
    chime_flash: Option<Instant>,
    pub last_save_ok: Option<bool>,
    dialog_state: DialogState,
    pub settings_open: bool,
    pub(crate) settings_tab: settings_dialog::SettingsTab,
    pub(crate) about_open: bool,
    last_window_title: String,
}

impl App {
    /// Creates a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        // Load config
        let config_path = AppConfig::config_path();
        let app_config = AppConfig::load_or_create(&config_path);

        let locale = Locale::from_code(&app_config.locale).unwrap_or_default();
        let theme_mode = ThemeMode(app_config.theme.clone());
        Self::apply_theme(&cc.egui_ctx, &theme_mode);

        // Open the data store; fall back to in-memory on failure
        let store = match DataStore::open(&resolve_data_dir()) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Failed to open data store, changes will not persist: {e}");
                None
            }
        };

        let mut board: Board =
            Self::load_collection(&store, Collection::Board).unwrap_or_default();
        if board.columns.is_empty() {
            tracing::warn!("Stored board has no columns, starting fresh");
            board = Board::default();
        }
        let tally: FocusTally = Self::load_collection(&store, Collection::PomodoroTally)
            .unwrap_or_default();
        let active_view = Self::load_collection::<UiStateData>(&store, Collection::UiState)
            .and_then(|s| ViewKind::from_key(&s.active_view))
            .unwrap_or_default();

        // Seed the undo history with the loaded board
        let mut history =
            SnapshotHistory::new(HistoryConfig::with_capacity(app_config.history_depth));
        if let Err(e) = history.commit(&board) {
            tracing::warn!("Failed to seed undo history: {e}");
        }

        let pomodoro = PomodoroTimer::new(PomodoroSettings {
            focus_minutes: app_config.pomodoro_focus_minutes,
            short_break_minutes: app_config.pomodoro_short_break_minutes,
            long_break_minutes: app_config.pomodoro_long_break_minutes,
            long_break_every: app_config.pomodoro_long_break_every,
            auto_advance: app_config.pomodoro_auto_advance,
        });

        let mut sound = SoundHub::new(SoundSettings {
            enabled: app_config.sound_enabled,
            volume: app_config.sound_volume,
        });
        sound.subscribe(|s| {
            tracing::debug!(enabled = s.enabled, volume = s.volume, "sound settings changed");
        });

        let mut app = Self {
            board,
            history,
            pomodoro,
            tally,
            reminders: ReminderLedger::new(),
            active_reminders: Vec::new(),
            store,
            locale,
            theme_mode,
            show_completed_tasks: app_config.show_completed_tasks,
            sound,
            history_depth: app_config.history_depth,
            reminder_lead_minutes: app_config.reminder_lead_minutes,
            active_view,
            focus_task_id: None,
            new_task_text: String::new(),
            request_input_focus: false,
            title_edit_dirty: false,
            config_path,
            last_frame: Instant::now(),
            last_reminder_poll: Instant::now(),
            chime_flash: None,
            last_save_ok: None,
            dialog_state: DialogState::None,
            settings_open: false,
            settings_tab: settings_dialog::SettingsTab::default(),
            about_open: false,
            last_window_title: String::new(),
        };

        // Task requested via CLI argument; recorded as a normal edit
        if let Some(title) = args.new_task {
            let column_id = app.board.columns[0].id.clone();
            let task = Task::new(title);
            if let Err(e) = app.board.add_task(&column_id, task) {
                tracing::warn!("Failed to add startup task: {e}");
            } else {
                app.commit_and_persist();
            }
        }

        app
    }

    /// The label table for the active locale.
    pub(crate) fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    /// Loads one collection from the store, logging failures.
    fn load_collection<T: serde::de::DeserializeOwned>(
        store: &Option<DataStore>,
        collection: Collection,
    ) -> Option<T> {
        let store = store.as_ref()?;
        match store.load(collection) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to load {}: {e}", collection.key());
                None
            }
        }
    }

    /// Applies egui visuals for the theme mode.
    fn apply_theme(ctx: &egui::Context, mode: &ThemeMode) {
        let mut visuals = if mode.resolve() == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        visuals.window_corner_radius = egui::CornerRadius::same(6);
        let widget_rounding = egui::CornerRadius::same(4);
        visuals.widgets.noninteractive.corner_radius = widget_rounding;
        visuals.widgets.inactive.corner_radius = widget_rounding;
        visuals.widgets.hovered.corner_radius = widget_rounding;
        visuals.widgets.active.corner_radius = widget_rounding;
        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
            style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
            style.spacing.window_margin = egui::Margin::same(12);
        });
    }

    /// Switches the theme and re-applies visuals.
    pub fn set_theme_mode(&mut self, mode: ThemeMode, ctx: &egui::Context) {
        self.theme_mode = mode;
        Self::apply_theme(ctx, &self.theme_mode);
    }

    /// Switches the UI language.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Returns true if any dialog is currently open and capturing input.
    pub(crate) fn is_dialog_open(&self) -> bool {
        self.settings_open
            || self.about_open
            || matches!(self.dialog_state, DialogState::ConfirmDelete(_))
    }

    /// Updates the OS window title with the open-task count.
    ///
    /// Only sends the viewport command when the title actually changes,
    /// to avoid triggering unnecessary repaints.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        let open = self.board.open_count();
        let title = if open == 0 {
            self.strings().app_title.to_string()
        } else {
            format!("{} ({open})", self.strings().app_title)
        };
        if title != self.last_window_title {
            self.last_window_title.clone_from(&title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }

    /// Advances the pomodoro clock and reacts to phase changes.
    fn tick_pomodoro(&mut self, dt: Duration) {
        if let Some(event) = self.pomodoro.tick(dt) {
            self.on_phase_event(event);
        }
    }

    /// Reacts to a completed pomodoro phase.
    pub(crate) fn on_phase_event(&mut self, event: PhaseEvent) {
        if event == PhaseEvent::FocusComplete {
            self.tally.record(chrono::Local::now().date_naive());
            self.persist_tally();

            // Credit the session to the selected task, as a normal edit
            if let Some(task_id) = self.focus_task_id.clone() {
                if let Some(task) = self.board.task_mut(&task_id) {
                    task.completed_pomodoros += 1;
                    self.commit_and_persist();
                }
            }
        }
        self.play_chime();
    }

    /// Surfaces the chime: status-bar flash plus a log line.
    ///
    /// Volume comes from the shared hub; 0.0 (or disabled) means silence.
    pub(crate) fn play_chime(&mut self) {
        let volume = self.sound.effective_volume();
        if volume > 0.0 {
            tracing::info!(volume, "chime");
            self.chime_flash = Some(Instant::now());
        }
    }

    /// Whether the chime indicator should currently be shown.
    pub(crate) fn chime_visible(&self) -> bool {
        self.chime_flash
            .is_some_and(|at| at.elapsed() < Duration::from_secs(CHIME_FLASH_SECS))
    }

    /// Collects newly due reminders, roughly once a second.
    fn poll_reminders(&mut self) {
        if self.last_reminder_poll.elapsed() < Duration::from_secs(1) {
            return;
        }
        self.last_reminder_poll = Instant::now();

        let lead = chrono::Duration::minutes(self.reminder_lead_minutes);
        let fired = self
            .reminders
            .due_now(&self.board, chrono::Utc::now(), lead);
        if !fired.is_empty() {
            self.active_reminders.extend(fired);
            self.play_chime();
        }
    }

    /// Writes the board to the store, synchronous and best effort.
    pub(crate) fn persist_board(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        match store.save(Collection::Board, &self.board) {
            Ok(()) => self.last_save_ok = Some(true),
            Err(e) => {
                tracing::warn!("Failed to persist board: {e}");
                self.last_save_ok = Some(false);
            }
        }
    }

    /// Writes the focus tally to the store.
    fn persist_tally(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(Collection::PomodoroTally, &self.tally) {
            tracing::warn!("Failed to persist pomodoro tally: {e}");
        }
    }

    /// Writes the UI state to the store.
    fn persist_ui_state(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        let state = UiStateData {
            active_view: self.active_view.key().to_string(),
        };
        if let Err(e) = store.save(Collection::UiState, &state) {
            tracing::warn!("Failed to persist UI state: {e}");
        }
    }

    /// Shows all dialog windows.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        let strings = self.strings();

        // Confirm delete dialog
        if let DialogState::ConfirmDelete(task_id) = &self.dialog_state {
            let task_id = task_id.clone();
            let title = self
                .board
                .task(&task_id)
                .map(|t| t.title.clone())
                .unwrap_or_default();
            let mut open = true;

            egui::Window::new(strings.confirm_delete_title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.spacing_mut().item_spacing.y = 8.0;
                    ui.label(format!("'{title}'"));
                    ui.label(strings.confirm_delete_body);
                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        if ui.button(strings.confirm_delete_yes).clicked() {
                            self.delete_task(&task_id);
                            self.dialog_state = DialogState::None;
                        }
                        if ui.button(strings.confirm_cancel).clicked() {
                            self.dialog_state = DialogState::None;
                        }
                    });
                });

            if !open {
                self.dialog_state = DialogState::None;
            }
        }

        // Settings dialog
        self.show_settings_dialog(ctx);

        // About dialog
        if self.about_open {
            let mut open = true;
            egui::Window::new(strings.action_about)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(strings.app_title);
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.weak("Tasks, kanban, pomodoro, reminders.");
                });
            if !open {
                self.about_open = false;
            }
        }

        // Reminder popups
        self.show_reminders(ctx);
    }

    /// Shows the fired-reminders window while any are pending.
    fn show_reminders(&mut self, ctx: &egui::Context) {
        if self.active_reminders.is_empty() {
            return;
        }
        let strings = self.strings();

        egui::Window::new(strings.reminder_due)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
            .show(ctx, |ui| {
                let mut dismiss: Option<usize> = None;
                for (idx, reminder) in self.active_reminders.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let due_local = reminder.due_at.with_timezone(&chrono::Local);
                        let text = egui::RichText::new(&reminder.title).strong();
                        if reminder.overdue {
                            ui.label(text.color(ui.visuals().error_fg_color));
                        } else {
                            ui.label(text);
                        }
                        ui.label(due_local.format("%H:%M").to_string());
                        if ui.small_button(strings.reminder_dismiss).clicked() {
                            dismiss = Some(idx);
                        }
                    });
                }
                if let Some(idx) = dismiss {
                    self.active_reminders.remove(idx);
                }
            });
    }
}

impl eframe::App for App {
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.handle_global_shortcuts(ctx);
        self.tick_pomodoro(dt);
        self.poll_reminders();
        self.update_window_title(ctx);

        let panel_fill = ctx.style().visuals.panel_fill;
        let faint_bg = ctx.style().visuals.faint_bg_color;
        let extreme_bg = ctx.style().visuals.extreme_bg_color;
        let strings = self.strings();

        // Menu bar
        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.show_menu_bar(ui, ctx);
            });

        // View strip
        egui::TopBottomPanel::top("view_strip")
            .frame(
                egui::Frame::new()
                    .fill(faint_bg)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.active_view, ViewKind::Tasks, strings.view_tasks);
                    ui.selectable_value(&mut self.active_view, ViewKind::Board, strings.view_board);
                    ui.selectable_value(
                        &mut self.active_view,
                        ViewKind::Pomodoro,
                        strings.view_pomodoro,
                    );
                });
            });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(extreme_bg)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        // Active view
        egui::CentralPanel::default().show(ctx, |ui| match self.active_view {
            ViewKind::Tasks => self.show_tasks_view(ui),
            ViewKind::Board => self.show_board_view(ui),
            ViewKind::Pomodoro => self.show_pomodoro_view(ui),
        });

        // Dialogs
        self.show_dialogs(ctx);

        // Keep the clock moving while a phase runs; otherwise wake for the
        // next reminder poll.
        let next_repaint = if self.pomodoro.is_running() {
            Duration::from_millis(200)
        } else {
            Duration::from_secs(1)
        };
        ctx.request_repaint_after(next_repaint);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_board();
        self.persist_tally();
        self.persist_ui_state();

        // Save current preferences to the config file
        let settings = self.pomodoro.settings();
        let sound = self.sound.settings();
        let config = AppConfig {
            theme: self.theme_mode.0.clone(),
            locale: self.locale.code().to_string(),
            show_completed_tasks: self.show_completed_tasks,
            history_depth: self.history_depth,
            sound_enabled: sound.enabled,
            sound_volume: sound.volume,
            pomodoro_focus_minutes: settings.focus_minutes,
            pomodoro_short_break_minutes: settings.short_break_minutes,
            pomodoro_long_break_minutes: settings.long_break_minutes,
            pomodoro_long_break_every: settings.long_break_every,
            pomodoro_auto_advance: settings.auto_advance,
            reminder_lead_minutes: self.reminder_lead_minutes,
        };
        if let Err(e) = config.save(&self.config_path) {
            tracing::warn!("Failed to save config on exit: {e}");
        }
    }
}
