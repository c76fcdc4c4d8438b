pub mod board;
pub mod pomodoro;
pub mod reminders;
pub mod task;
pub mod undo;

pub use board::{Board, Column};
pub use pomodoro::{FocusTally, Phase, PhaseEvent, PomodoroSettings, PomodoroTimer};
pub use reminders::{Reminder, ReminderLedger};
pub use task::Task;
pub use undo::SnapshotHistory;
