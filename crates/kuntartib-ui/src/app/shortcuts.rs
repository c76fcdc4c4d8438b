//! Global keyboard shortcut handling.
//!
//! Processes key events and maps them to application actions: undo/redo,
//! task entry, saving, and view switching.

use eframe::egui;

use super::{App, DialogState, ViewKind};

impl App {
    /// Handles global keyboard shortcuts.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        let (ctrl, keys) = ctx.input(|i| {
            let ctrl = i.modifiers.ctrl || i.modifiers.command;
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect();
            (ctrl, keys)
        });

        let dialog_open = self.is_dialog_open();

        for key in &keys {
            if self.handle_escape_shortcut(*key) {
                continue;
            }
            // Everything else is suppressed while a dialog captures input
            if dialog_open {
                continue;
            }
            if self.handle_edit_shortcut(*key, ctrl) {
                continue;
            }
            self.handle_view_shortcut(*key, ctrl);
        }
    }

    /// Escape key: closes dialogs.
    /// Returns `true` if the key was consumed.
    fn handle_escape_shortcut(&mut self, key: egui::Key) -> bool {
        if key != egui::Key::Escape {
            return false;
        }
        self.settings_open = false;
        self.about_open = false;
        self.dialog_state = DialogState::None;
        true
    }

    /// Edit shortcuts (Ctrl+Z, Ctrl+Y, Ctrl+N, Ctrl+S).
    /// Returns `true` if the key was consumed.
    fn handle_edit_shortcut(&mut self, key: egui::Key, ctrl: bool) -> bool {
        if !ctrl {
            return false;
        }
        match key {
            egui::Key::Z => self.undo(),
            egui::Key::Y => self.redo(),
            egui::Key::N => {
                self.active_view = ViewKind::Tasks;
                self.request_input_focus = true;
            }
            egui::Key::S => self.persist_board(),
            _ => return false,
        }
        true
    }

    /// View switching shortcuts (Ctrl+1, Ctrl+2, Ctrl+3).
    fn handle_view_shortcut(&mut self, key: egui::Key, ctrl: bool) {
        if !ctrl {
            return;
        }
        match key {
            egui::Key::Num1 => self.active_view = ViewKind::Tasks,
            egui::Key::Num2 => self.active_view = ViewKind::Board,
            egui::Key::Num3 => self.active_view = ViewKind::Pomodoro,
            _ => {}
        }
    }
}
