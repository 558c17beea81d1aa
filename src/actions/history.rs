//! The last-in-first-out stack of applied actions.
//!
//! Only actions whose `apply` has succeeded belong here. Undoing pops the
//! most recent action and inverts it; a popped action is gone for good,
//! whatever the invert reports (there is no redo).

use crate::actions::Action;
use crate::error::{AppError, Result};
use crate::salon::Registry;
use tracing::debug;

/// Stack of executed actions, most-recent-last.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<Action>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an applied action. O(1).
    pub fn record(&mut self, action: Action) {
        debug!("Recording action: {}", action);
        self.stack.push(action);
    }

    /// Pops the most recent action and inverts it against `registry`,
    /// returning the undone action so the caller can describe it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyHistory` if nothing has been recorded, and
    /// propagates whatever the invert itself reports.
    pub fn undo_last(&mut self, registry: &mut Registry) -> Result<Action> {
        let action = self.stack.pop().ok_or(AppError::EmptyHistory)?;
        action.invert(registry)?;
        Ok(action)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
