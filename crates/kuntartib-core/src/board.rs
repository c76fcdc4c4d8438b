/// Kanban board: columns of tasks with splice-based reordering.
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::Task;

/// One column on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Stable identity (uuid v4 string).
    pub id: String,
    pub title: String,
    /// Tasks in display order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }
}

/// The kanban board. This is also the snapshot payload recorded by the
/// undo history, so it stays a plain cloneable value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: vec![
                Column::new("To Do"),
                Column::new("In Progress"),
                Column::new("Done"),
            ],
        }
    }
}

impl Board {
    /// Looks up a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Looks up a task anywhere on the board.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .find(|t| t.id == task_id)
    }

    /// Mutable task lookup.
    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }

    /// Returns the column id and position of a task.
    pub fn locate(&self, task_id: &str) -> Option<(&str, usize)> {
        for column in &self.columns {
            if let Some(idx) = column.tasks.iter().position(|t| t.id == task_id) {
                return Some((column.id.as_str(), idx));
            }
        }
        None
    }

    /// Appends a task to the given column.
    ///
    /// # Errors
    ///
    /// Fails if the column doesn't exist.
    pub fn add_task(&mut self, column_id: &str, task: Task) -> Result<()> {
        let Some(column) = self.columns.iter_mut().find(|c| c.id == column_id) else {
            bail!("No such column: {column_id}");
        };
        column.tasks.push(task);
        Ok(())
    }

    /// Removes a task from wherever it lives, returning it.
    pub fn remove_task(&mut self, task_id: &str) -> Option<Task> {
        for column in &mut self.columns {
            if let Some(idx) = column.tasks.iter().position(|t| t.id == task_id) {
                return Some(column.tasks.remove(idx));
            }
        }
        None
    }

    /// Moves a task to `target_index` within `target_column_id`.
    ///
    /// Splice semantics: the task is removed from its current position and
    /// inserted at the target index (clamped to the column length). Handles
    /// within-column reordering and cross-column moves uniformly.
    ///
    /// # Errors
    ///
    /// Fails if the task or the target column doesn't exist; the board is
    /// left unchanged in that case.
    pub fn move_task(
        &mut self,
        task_id: &str,
        target_column_id: &str,
        target_index: usize,
    ) -> Result<()> {
        let Some(col_idx) = self.columns.iter().position(|c| c.id == target_column_id) else {
            bail!("No such column: {target_column_id}");
        };
        let Some(task) = self.remove_task(task_id) else {
            bail!("No such task: {task_id}");
        };
        let column = &mut self.columns[col_idx];
        let index = target_index.min(column.tasks.len());
        column.tasks.insert(index, task);
        Ok(())
    }

    /// Adds a new empty column at the end, returning its id.
    pub fn add_column(&mut self, title: impl Into<String>) -> String {
        let column = Column::new(title);
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// Fails if the column doesn't exist.
    pub fn rename_column(&mut self, column_id: &str, title: impl Into<String>) -> Result<()> {
        let Some(column) = self.columns.iter_mut().find(|c| c.id == column_id) else {
            bail!("No such column: {column_id}");
        };
        column.title = title.into();
        Ok(())
    }

    /// Removes a column, re-homing its tasks to the first remaining column.
    ///
    /// # Errors
    ///
    /// Fails if the column doesn't exist or it is the last column.
    pub fn remove_column(&mut self, column_id: &str) -> Result<()> {
        if self.columns.len() <= 1 {
            bail!("Cannot remove the last column");
        }
        let Some(idx) = self.columns.iter().position(|c| c.id == column_id) else {
            bail!("No such column: {column_id}");
        };
        let removed = self.columns.remove(idx);
        self.columns[0].tasks.extend(removed.tasks);
        Ok(())
    }

    /// Total number of tasks.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Number of open (not done) tasks.
    pub fn open_count(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .filter(|t| !t.done)
            .count()
    }

    /// Number of completed tasks.
    pub fn done_count(&self) -> usize {
        self.task_count() - self.open_count()
    }

    /// Checks structural integrity: no duplicate task or column ids.
    ///
    /// This is the malformed-entry gate for history commits: a board that
    /// fails here must never be recorded as a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error naming the first duplicate found.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = std::collections::HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id.as_str()) {
                bail!("Duplicate column id: {}", column.id);
            }
        }
        let mut task_ids = std::collections::HashSet::new();
        for task in self.columns.iter().flat_map(|c| c.tasks.iter()) {
            if !task_ids.insert(task.id.as_str()) {
                bail!("Duplicate task id: {}", task.id);
            }
        }
        Ok(())
    }
}
