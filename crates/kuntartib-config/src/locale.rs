/// UI localization.
///
/// Two languages ship built in: English and Uzbek. Labels are resolved
/// through a static `Strings` table per locale so views never hard-code
/// user-visible text.

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Uzbek,
}

impl Locale {
    /// Parses a locale code, `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::English),
            "uz" => Some(Locale::Uzbek),
            _ => None,
        }
    }

    /// The persisted locale code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Uzbek => "uz",
        }
    }

    /// Human-readable language name, in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Uzbek => "O'zbekcha",
        }
    }

    /// All supported locales, in menu order.
    pub fn all() -> [Locale; 2] {
        [Locale::English, Locale::Uzbek]
    }

    /// The label table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::English => &EN,
            Locale::Uzbek => &UZ,
        }
    }
}

/// Every user-visible label in the app.
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    pub view_tasks: &'static str,
    pub view_board: &'static str,
    pub view_pomodoro: &'static str,
    pub menu_file: &'static str,
    pub menu_edit: &'static str,
    pub menu_view: &'static str,
    pub menu_settings: &'static str,
    pub menu_help: &'static str,
    pub action_save_now: &'static str,
    pub action_exit: &'static str,
    pub action_undo: &'static str,
    pub action_redo: &'static str,
    pub action_clear_history: &'static str,
    pub action_new_task: &'static str,
    pub action_preferences: &'static str,
    pub action_about: &'static str,
    pub show_completed: &'static str,
    pub add_task_hint: &'static str,
    pub add_button: &'static str,
    pub task_notes: &'static str,
    pub task_due: &'static str,
    pub task_done: &'static str,
    pub task_delete: &'static str,
    pub task_move_up: &'static str,
    pub task_move_down: &'static str,
    pub column_send_to: &'static str,
    pub pomodoro_focus: &'static str,
    pub pomodoro_short_break: &'static str,
    pub pomodoro_long_break: &'static str,
    pub pomodoro_idle: &'static str,
    pub pomodoro_start: &'static str,
    pub pomodoro_pause: &'static str,
    pub pomodoro_resume: &'static str,
    pub pomodoro_skip: &'static str,
    pub pomodoro_reset: &'static str,
    pub pomodoro_sessions_today: &'static str,
    pub reminder_due: &'static str,
    pub reminder_dismiss: &'static str,
    pub settings_title: &'static str,
    pub settings_general: &'static str,
    pub settings_pomodoro: &'static str,
    pub settings_sound: &'static str,
    pub settings_history: &'static str,
    pub settings_theme: &'static str,
    pub settings_language: &'static str,
    pub settings_sound_enabled: &'static str,
    pub settings_sound_volume: &'static str,
    pub settings_focus_minutes: &'static str,
    pub settings_short_break_minutes: &'static str,
    pub settings_long_break_minutes: &'static str,
    pub settings_long_break_every: &'static str,
    pub settings_auto_advance: &'static str,
    pub settings_history_depth: &'static str,
    pub settings_reminder_lead: &'static str,
    pub status_open_tasks: &'static str,
    pub status_done_tasks: &'static str,
    pub status_saved: &'static str,
    pub status_save_failed: &'static str,
    pub theme_system: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    pub confirm_delete_title: &'static str,
    pub confirm_delete_body: &'static str,
    pub confirm_delete_yes: &'static str,
    pub confirm_cancel: &'static str,
}

static EN: Strings = Strings {
    app_title: "KunTartib",
    view_tasks: "Tasks",
    view_board: "Board",
    view_pomodoro: "Pomodoro",
    menu_file: "File",
    menu_edit: "Edit",
    menu_view: "View",
    menu_settings: "Settings",
    menu_help: "Help",
    action_save_now: "Save Now",
    action_exit: "Exit",
    action_undo: "Undo",
    action_redo: "Redo",
    action_clear_history: "Clear Undo History",
    action_new_task: "New Task",
    action_preferences: "Preferences...",
    action_about: "About KunTartib",
    show_completed: "Show Completed Tasks",
    add_task_hint: "What needs doing?",
    add_button: "Add",
    task_notes: "Notes",
    task_due: "Due",
    task_done: "Done",
    task_delete: "Delete",
    task_move_up: "Move Up",
    task_move_down: "Move Down",
    column_send_to: "Send to",
    pomodoro_focus: "Focus",
    pomodoro_short_break: "Short Break",
    pomodoro_long_break: "Long Break",
    pomodoro_idle: "Ready",
    pomodoro_start: "Start",
    pomodoro_pause: "Pause",
    pomodoro_resume: "Resume",
    pomodoro_skip: "Skip",
    pomodoro_reset: "Reset",
    pomodoro_sessions_today: "Focus sessions today",
    reminder_due: "Due soon",
    reminder_dismiss: "Dismiss",
    settings_title: "Settings",
    settings_general: "General",
    settings_pomodoro: "Pomodoro",
    settings_sound: "Sound",
    settings_history: "History",
    settings_theme: "Theme",
    settings_language: "Language",
    settings_sound_enabled: "Play chime on phase change",
    settings_sound_volume: "Volume",
    settings_focus_minutes: "Focus length (minutes)",
    settings_short_break_minutes: "Short break (minutes)",
    settings_long_break_minutes: "Long break (minutes)",
    settings_long_break_every: "Long break every N sessions",
    settings_auto_advance: "Start next phase automatically",
    settings_history_depth: "Undo history depth",
    settings_reminder_lead: "Remind minutes before due",
    status_open_tasks: "open",
    status_done_tasks: "done",
    status_saved: "Saved",
    status_save_failed: "Save failed",
    theme_system: "System",
    theme_dark: "Dark",
    theme_light: "Light",
    confirm_delete_title: "Delete Task",
    confirm_delete_body: "Delete this task? You can undo afterwards.",
    confirm_delete_yes: "Delete",
    confirm_cancel: "Cancel",
};

static UZ: Strings = Strings {
    app_title: "KunTartib",
    view_tasks: "Vazifalar",
    view_board: "Doska",
    view_pomodoro: "Pomodoro",
    menu_file: "Fayl",
    menu_edit: "Tahrir",
    menu_view: "Ko'rinish",
    menu_settings: "Sozlamalar",
    menu_help: "Yordam",
    action_save_now: "Hozir saqlash",
    action_exit: "Chiqish",
    action_undo: "Bekor qilish",
    action_redo: "Qaytarish",
    action_clear_history: "Tarixni tozalash",
    action_new_task: "Yangi vazifa",
    action_preferences: "Sozlamalar...",
    action_about: "KunTartib haqida",
    show_completed: "Bajarilganlarni ko'rsatish",
    add_task_hint: "Nima qilish kerak?",
    add_button: "Qo'shish",
    task_notes: "Izohlar",
    task_due: "Muddat",
    task_done: "Bajarildi",
    task_delete: "O'chirish",
    task_move_up: "Yuqoriga",
    task_move_down: "Pastga",
    column_send_to: "Ko'chirish",
    pomodoro_focus: "Diqqat",
    pomodoro_short_break: "Qisqa tanaffus",
    pomodoro_long_break: "Uzun tanaffus",
    pomodoro_idle: "Tayyor",
    pomodoro_start: "Boshlash",
    pomodoro_pause: "To'xtatish",
    pomodoro_resume: "Davom etish",
    pomodoro_skip: "O'tkazib yuborish",
    pomodoro_reset: "Qayta boshlash",
    pomodoro_sessions_today: "Bugungi diqqat sessiyalari",
    reminder_due: "Muddat yaqin",
    reminder_dismiss: "Yopish",
    settings_title: "Sozlamalar",
    settings_general: "Umumiy",
    settings_pomodoro: "Pomodoro",
    settings_sound: "Ovoz",
    settings_history: "Tarix",
    settings_theme: "Mavzu",
    settings_language: "Til",
    settings_sound_enabled: "Bosqich almashganda signal",
    settings_sound_volume: "Ovoz balandligi",
    settings_focus_minutes: "Diqqat davomiyligi (daqiqa)",
    settings_short_break_minutes: "Qisqa tanaffus (daqiqa)",
    settings_long_break_minutes: "Uzun tanaffus (daqiqa)",
    settings_long_break_every: "Har N sessiyada uzun tanaffus",
    settings_auto_advance: "Keyingi bosqich avtomatik boshlansin",
    settings_history_depth: "Bekor qilish tarixi chuqurligi",
    settings_reminder_lead: "Muddatdan necha daqiqa oldin eslatish",
    status_open_tasks: "ochiq",
    status_done_tasks: "bajarilgan",
    status_saved: "Saqlandi",
    status_save_failed: "Saqlash muvaffaqiyatsiz",
    theme_system: "Tizim",
    theme_dark: "Qorong'u",
    theme_light: "Yorug'",
    confirm_delete_title: "Vazifani o'chirish",
    confirm_delete_body: "Bu vazifa o'chirilsinmi? Keyin bekor qilish mumkin.",
    confirm_delete_yes: "O'chirish",
    confirm_cancel: "Bekor qilish",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("uz"), Some(Locale::Uzbek));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_code_round_trip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_strings_differ_between_locales() {
        assert_ne!(
            Locale::English.strings().view_tasks,
            Locale::Uzbek.strings().view_tasks
        );
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }
}
