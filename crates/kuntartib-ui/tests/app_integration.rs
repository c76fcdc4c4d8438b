/// Integration tests for the KunTartib App using egui_kittest.
///
/// These tests exercise the full `eframe::App::update` loop through
/// AccessKit queries.
mod common;

use egui::{Key, Modifiers};
use egui_kittest::kittest::Queryable;

use common::create_harness;
use kuntartib_ui::ViewKind;

fn ctrl() -> Modifiers {
    Modifiers {
        ctrl: true,
        ..Default::default()
    }
}

// ── A. App Initialization ──────────────────────────────────────────────────

#[test]
fn test_app_initial_state() {
    let (harness, _dir) = create_harness();
    let app = harness.state();
    assert_eq!(app.board.task_count(), 0);
    assert_eq!(app.board.columns.len(), 3);
    assert!(!app.history.can_undo());
    assert!(!app.history.can_redo());
}

#[test]
fn test_view_strip_labels_present() {
    let (harness, _dir) = create_harness();
    harness.get_by_label("Tasks");
    harness.get_by_label("Board");
    harness.get_by_label("Pomodoro");
}

#[test]
fn test_menu_bar_present() {
    let (harness, _dir) = create_harness();
    harness.get_by_label("File");
    harness.get_by_label("Edit");
    harness.get_by_label("View");
}

// ── B. Status Bar ──────────────────────────────────────────────────────────

#[test]
fn test_status_bar_shows_counts() {
    let (harness, _dir) = create_harness();
    harness.get_by_label("0 open · 0 done");
}

#[test]
fn test_status_bar_counts_update() {
    let (mut harness, _dir) = create_harness();
    {
        let app = harness.state_mut();
        let column_id = app.board.columns[0].id.clone();
        app.new_task_text = "buy milk".to_string();
        app.add_task_from_input(&column_id);
    }
    harness.run();
    harness.get_by_label("1 open · 0 done");
}

// ── C. View Switching ──────────────────────────────────────────────────────

#[test]
fn test_click_switches_to_board_view() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Board").click();
    harness.run();
    assert_eq!(harness.state().active_view, ViewKind::Board);
}

#[test]
fn test_ctrl_number_switches_views() {
    let (mut harness, _dir) = create_harness();
    harness.key_press_modifiers(ctrl(), Key::Num3);
    harness.run();
    assert_eq!(harness.state().active_view, ViewKind::Pomodoro);

    harness.key_press_modifiers(ctrl(), Key::Num1);
    harness.run();
    assert_eq!(harness.state().active_view, ViewKind::Tasks);
}

// ── D. Undo/Redo ───────────────────────────────────────────────────────────

#[test]
fn test_undo_shortcut_reverts_add() {
    let (mut harness, _dir) = create_harness();
    {
        let app = harness.state_mut();
        let column_id = app.board.columns[0].id.clone();
        app.new_task_text = "buy milk".to_string();
        app.add_task_from_input(&column_id);
    }
    harness.run();
    assert_eq!(harness.state().board.task_count(), 1);

    harness.key_press_modifiers(ctrl(), Key::Z);
    harness.run();
    assert_eq!(harness.state().board.task_count(), 0);

    harness.key_press_modifiers(ctrl(), Key::Y);
    harness.run();
    assert_eq!(harness.state().board.task_count(), 1);
}

#[test]
fn test_undo_shortcut_noop_on_fresh_app() {
    let (mut harness, _dir) = create_harness();
    harness.key_press_modifiers(ctrl(), Key::Z);
    harness.run();
    assert_eq!(harness.state().board.task_count(), 0);
    assert!(!harness.state().history.can_redo());
}

// ── E. Pomodoro ────────────────────────────────────────────────────────────

#[test]
fn test_pomodoro_start_button() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Pomodoro").click();
    harness.run();

    harness.get_by_label("Start").click();
    harness.run();

    let app = harness.state();
    assert!(app.pomodoro.is_running());
    assert_eq!(app.pomodoro.phase(), kuntartib_core::Phase::Focus);
}

#[test]
fn test_pomodoro_idle_readout() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Pomodoro").click();
    harness.run();
    harness.get_by_label("00:00");
    harness.get_by_label("Ready");
}

// ── F. Dialogs ─────────────────────────────────────────────────────────────

#[test]
fn test_settings_dialog_opens_and_escape_closes() {
    let (mut harness, _dir) = create_harness();
    harness.state_mut().settings_open = true;
    harness.run();
    // Rendered only inside the open settings dialog
    harness.get_by_label("Show Completed Tasks");

    harness.key_press(Key::Escape);
    harness.run();
    assert!(!harness.state().settings_open);
}

#[test]
fn test_shortcuts_suppressed_while_dialog_open() {
    let (mut harness, _dir) = create_harness();
    harness.state_mut().settings_open = true;
    harness.run();

    harness.key_press_modifiers(ctrl(), Key::Num2);
    harness.run();
    assert_eq!(harness.state().active_view, ViewKind::Tasks);
}

// ── G. Tasks view ──────────────────────────────────────────────────────────

#[test]
fn test_task_title_rendered_on_board() {
    let (mut harness, _dir) = create_harness();
    {
        let app = harness.state_mut();
        let column_id = app.board.columns[0].id.clone();
        app.new_task_text = "water the plants".to_string();
        app.add_task_from_input(&column_id);
    }
    harness.get_by_label("Board").click();
    harness.run();
    harness.get_by_label("water the plants");
}

#[test]
fn test_board_view_shows_column_titles() {
    let (mut harness, _dir) = create_harness();
    harness.get_by_label("Board").click();
    harness.run();
    harness.get_by_label("To Do");
    harness.get_by_label("In Progress");
    harness.get_by_label("Done");
}
