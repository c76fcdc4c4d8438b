/// Bounded linear history with a cursor.
///
/// Entries before the cursor are undo-able, entries after it are redo-able.
/// Pushing while the cursor is not at the end discards the redo branch.
/// When the stack grows past its capacity the oldest entry is evicted.
use crate::config::HistoryConfig;

/// Linear undo/redo history over opaque snapshots.
///
/// The stack starts empty; the owning controller seeds it with the initial
/// state via the first `push`. Boundary `undo`/`redo` calls are benign
/// no-ops returning `None`, never errors.
pub struct BoundedHistory<T> {
    /// Snapshots in chronological order (index 0 = oldest retained).
    entries: Vec<T>,
    /// Index of the current snapshot. Meaningless while `entries` is empty.
    cursor: usize,
    /// Max entries retained, fixed at construction.
    capacity: usize,
    /// Whether pushes are accepted (false while a snapshot is replayed).
    recording: bool,
}

impl<T> std::fmt::Debug for BoundedHistory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedHistory")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity)
            .field("recording", &self.recording)
            .finish()
    }
}

impl<T> BoundedHistory<T> {
    /// Creates an empty history with the configured capacity.
    pub fn new(config: HistoryConfig) -> Self {
        let mut config = config;
        config.sanitize();
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: config.capacity,
            recording: true,
        }
    }

    /// Creates an empty history with the default capacity.
    pub fn with_default_capacity() -> Self {
        Self::new(HistoryConfig::default())
    }

    /// Records a new snapshot as the current state.
    ///
    /// If the cursor is not at the newest entry, everything after it is
    /// discarded first (redo is invalidated by any new action). When the
    /// stack exceeds its capacity the oldest entry is evicted and the
    /// cursor shifts down with it.
    ///
    /// Suppressed while recording is paused, so state observers reacting
    /// to an undo/redo replay cannot corrupt the history they came from.
    pub fn push(&mut self, entry: T) {
        if !self.recording {
            tracing::trace!("history push suppressed during replay");
            return;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Steps the cursor back and returns the snapshot now current.
    ///
    /// Returns `None` when already at the oldest retained entry (the
    /// initial state is never undone away).
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Steps the cursor forward and returns the snapshot now current.
    ///
    /// Returns `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Whether a call to `undo` would step back.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    /// Whether a call to `redo` would step forward.
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor < self.entries.len() - 1
    }

    /// The snapshot at the cursor, or `None` before the first push.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    /// Drops all history except the current snapshot.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            self.cursor = 0;
            self.recording = true;
            return;
        }
        let current = self.entries.swap_remove(self.cursor);
        self.entries.clear();
        self.entries.push(current);
        self.cursor = 0;
        self.recording = true;
    }

    /// Suspends recording while an undone/redone snapshot is applied.
    ///
    /// The controller pauses before notifying state observers and resumes
    /// right after, so a commit fired by an observer during the replay is
    /// swallowed instead of being recorded as a new action.
    pub fn pause_recording(&mut self) {
        self.recording = false;
    }

    /// Re-enables recording after a replay.
    pub fn resume_recording(&mut self) {
        self.recording = true;
    }

    /// Whether pushes are currently accepted.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first push.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the current snapshot (0 while empty).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
