/// Pomodoro phase machine.
///
/// Purely synchronous: the UI calls `tick` with the wall-clock time that
/// elapsed since the last frame, and the machine reports phase changes as
/// events. No threads, no internal timers.
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Durations and cadence for the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    pub focus_minutes: u64,
    pub short_break_minutes: u64,
    pub long_break_minutes: u64,
    /// Every Nth completed focus session earns a long break.
    pub long_break_every: u32,
    /// Whether the next phase starts running without waiting for `start`.
    pub auto_advance: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_every: 4,
            auto_advance: false,
        }
    }
}

impl PomodoroSettings {
    fn focus(&self) -> Duration {
        Duration::from_secs(self.focus_minutes * 60)
    }

    fn short_break(&self) -> Duration {
        Duration::from_secs(self.short_break_minutes * 60)
    }

    fn long_break(&self) -> Duration {
        Duration::from_secs(self.long_break_minutes * 60)
    }
}

/// Current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing running yet (or after reset).
    #[default]
    Idle,
    Focus,
    ShortBreak,
    LongBreak,
}

/// Reported by `tick` when a phase runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// A focus session finished; the tally has been incremented.
    FocusComplete,
    /// A break finished.
    BreakComplete,
}

/// The timer state machine.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: PomodoroSettings,
    phase: Phase,
    remaining: Duration,
    running: bool,
    completed_focus: u32,
}

impl PomodoroTimer {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            phase: Phase::Idle,
            remaining: Duration::ZERO,
            running: false,
            completed_focus: 0,
        }
    }

    /// Replaces the settings. The remaining time of a phase already in
    /// progress is left untouched; new durations apply from the next phase.
    pub fn set_settings(&mut self, settings: PomodoroSettings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> PomodoroSettings {
        self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus
    }

    /// Fraction of the current phase already elapsed, in 0.0..=1.0.
    pub fn progress(&self) -> f32 {
        let total = match self.phase {
            Phase::Idle => return 0.0,
            Phase::Focus => self.settings.focus(),
            Phase::ShortBreak => self.settings.short_break(),
            Phase::LongBreak => self.settings.long_break(),
        };
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = total.saturating_sub(self.remaining);
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Starts a focus session from idle, or resumes a paused phase.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Focus;
            self.remaining = self.settings.focus();
        }
        self.running = true;
    }

    /// Pauses the clock without leaving the phase.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resumes a paused phase; from idle this behaves like `start`.
    pub fn resume(&mut self) {
        self.start();
    }

    /// Ends the current phase immediately, as if it ran out.
    pub fn skip(&mut self) -> Option<PhaseEvent> {
        if self.phase == Phase::Idle {
            return None;
        }
        self.remaining = Duration::ZERO;
        self.finish_phase()
    }

    /// Returns to idle, clearing the session tally.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining = Duration::ZERO;
        self.running = false;
        self.completed_focus = 0;
    }

    /// Advances the clock by `elapsed` wall time.
    ///
    /// Returns an event when the current phase ran out during this tick.
    /// At most one phase boundary is crossed per call; the host event loop
    /// ticks often enough that this never loses time in practice.
    pub fn tick(&mut self, elapsed: Duration) -> Option<PhaseEvent> {
        if !self.running || self.phase == Phase::Idle {
            return None;
        }
        if elapsed < self.remaining {
            self.remaining -= elapsed;
            return None;
        }
        self.remaining = Duration::ZERO;
        self.finish_phase()
    }

    /// Transitions out of the just-finished phase.
    fn finish_phase(&mut self) -> Option<PhaseEvent> {
        match self.phase {
            Phase::Idle => None,
            Phase::Focus => {
                self.completed_focus += 1;
                let every = self.settings.long_break_every.max(1);
                if self.completed_focus % every == 0 {
                    self.phase = Phase::LongBreak;
                    self.remaining = self.settings.long_break();
                } else {
                    self.phase = Phase::ShortBreak;
                    self.remaining = self.settings.short_break();
                }
                self.running = self.settings.auto_advance;
                Some(PhaseEvent::FocusComplete)
            }
            Phase::ShortBreak | Phase::LongBreak => {
                self.phase = Phase::Focus;
                self.remaining = self.settings.focus();
                self.running = self.settings.auto_advance;
                Some(PhaseEvent::BreakComplete)
            }
        }
    }
}

/// Completed focus sessions per calendar day.
///
/// Persisted across sessions under its own collection so the "sessions
/// today" counter survives a restart (unlike the in-memory timer tally).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTally {
    /// ISO date (YYYY-MM-DD) → completed focus sessions.
    pub days: std::collections::BTreeMap<String, u32>,
}

impl FocusTally {
    /// Records one completed focus session on `date`.
    pub fn record(&mut self, date: chrono::NaiveDate) {
        *self.days.entry(date.to_string()).or_insert(0) += 1;
    }

    /// Sessions completed on `date`.
    pub fn on(&self, date: chrono::NaiveDate) -> u32 {
        self.days.get(&date.to_string()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_settings() -> PomodoroSettings {
        PomodoroSettings {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_every: 4,
            auto_advance: false,
        }
    }

    fn mins(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn test_starts_idle() {
        let timer = PomodoroTimer::new(quick_settings());
        assert_eq!(timer.phase(), Phase::Idle);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn test_start_enters_focus() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        assert_eq!(timer.phase(), Phase::Focus);
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), mins(25));
    }

    #[test]
    fn test_tick_counts_down() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        assert!(timer.tick(mins(10)).is_none());
        assert_eq!(timer.remaining(), mins(15));
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        timer.pause();
        assert!(timer.tick(mins(10)).is_none());
        assert_eq!(timer.remaining(), mins(25));

        timer.resume();
        assert!(timer.is_running());
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let mut timer = PomodoroTimer::new(quick_settings());
        assert!(timer.tick(mins(60)).is_none());
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_focus_completion_enters_short_break() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        let event = timer.tick(mins(25));
        assert_eq!(event, Some(PhaseEvent::FocusComplete));
        assert_eq!(timer.phase(), Phase::ShortBreak);
        assert_eq!(timer.remaining(), mins(5));
        assert_eq!(timer.completed_focus_sessions(), 1);
        // auto_advance off: awaiting start
        assert!(!timer.is_running());
    }

    #[test]
    fn test_every_fourth_focus_earns_long_break() {
        let mut timer = PomodoroTimer::new(quick_settings());
        for session in 1..=4 {
            timer.start();
            assert_eq!(timer.tick(mins(25)), Some(PhaseEvent::FocusComplete));
            if session < 4 {
                assert_eq!(timer.phase(), Phase::ShortBreak);
                timer.start();
                assert_eq!(timer.tick(mins(5)), Some(PhaseEvent::BreakComplete));
                assert_eq!(timer.phase(), Phase::Focus);
            }
        }
        assert_eq!(timer.phase(), Phase::LongBreak);
        assert_eq!(timer.remaining(), mins(15));
        assert_eq!(timer.completed_focus_sessions(), 4);
    }

    #[test]
    fn test_auto_advance_keeps_running() {
        let mut settings = quick_settings();
        settings.auto_advance = true;
        let mut timer = PomodoroTimer::new(settings);
        timer.start();
        timer.tick(mins(25));
        assert_eq!(timer.phase(), Phase::ShortBreak);
        assert!(timer.is_running());
    }

    #[test]
    fn test_skip_ends_phase() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        timer.tick(mins(1));
        let event = timer.skip();
        assert_eq!(event, Some(PhaseEvent::FocusComplete));
        assert_eq!(timer.phase(), Phase::ShortBreak);
    }

    #[test]
    fn test_skip_while_idle_is_noop() {
        let mut timer = PomodoroTimer::new(quick_settings());
        assert!(timer.skip().is_none());
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        timer.tick(mins(25));
        timer.reset();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.completed_focus_sessions(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_progress() {
        let mut timer = PomodoroTimer::new(quick_settings());
        assert!(timer.progress().abs() < f32::EPSILON);
        timer.start();
        timer.tick(Duration::from_secs(25 * 30)); // half the focus phase
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_overshooting_tick_completes_phase_once() {
        let mut timer = PomodoroTimer::new(quick_settings());
        timer.start();
        let event = timer.tick(mins(200));
        assert_eq!(event, Some(PhaseEvent::FocusComplete));
        assert_eq!(timer.completed_focus_sessions(), 1);
        assert_eq!(timer.phase(), Phase::ShortBreak);
    }

    #[test]
    fn test_focus_tally() {
        let mut tally = FocusTally::default();
        let today = chrono::NaiveDate::from_ymd_opt(2026, 3, 14).expect("date");
        let yesterday = chrono::NaiveDate::from_ymd_opt(2026, 3, 13).expect("date");

        assert_eq!(tally.on(today), 0);
        tally.record(today);
        tally.record(today);
        tally.record(yesterday);
        assert_eq!(tally.on(today), 2);
        assert_eq!(tally.on(yesterday), 1);
    }
}
