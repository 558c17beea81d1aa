//! The three undoable actions: schedule, cancel, and modify.
//!
//! Each variant carries clones of the appointment(s) it affects; since a
//! clone keeps its `AppointmentId`, the action still refers to the same
//! booking the registry holds. The target registry is passed to
//! `apply`/`invert` rather than captured, so an action holds no borrow of
//! the registry between calls.
//!
//! The design assumes exactly one `apply` per action instance, enforced by
//! the interaction loop. `invert` performs the exact semantic opposite of
//! the last `apply`: a failed operation reports `NotFound` and leaves the
//! registry untouched.

use crate::error::Result;
use crate::models::Appointment;
use crate::salon::Registry;
use std::fmt;
use tracing::debug;

/// An undoable unit of work against the registry.
#[derive(Debug, Clone)]
pub enum Action {
    /// Book a new appointment; undone by removing that same booking.
    Schedule { appointment: Appointment },
    /// Remove an existing appointment; undone by re-adding it (appended at
    /// the end, not at its original index).
    Cancel { appointment: Appointment },
    /// Swap `old` for `new` at `old`'s current index; undone by swapping
    /// back at `new`'s current index.
    Modify {
        old: Appointment,
        new: Appointment,
    },
}

impl Action {
    /// Performs the forward mutation on `registry`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the target appointment is no
    /// longer present (Cancel/Modify); the registry is left unchanged.
    pub fn apply(&self, registry: &mut Registry) -> Result<()> {
        debug!("Applying action: {}", self);
        match self {
            Action::Schedule { appointment } => {
                registry.add(appointment.clone());
                Ok(())
            },
            Action::Cancel { appointment } => registry.remove(appointment.id()).map(|_| ()),
            Action::Modify { old, new } => registry.replace(old.id(), new.clone()).map(|_| ()),
        }
    }

    /// Performs the exact semantic opposite of `apply`, restoring the
    /// registry state for this action's affected entries.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the appointment to take back out
    /// (Schedule) or swap back (Modify) is absent; the registry is left
    /// unchanged.
    pub fn invert(&self, registry: &mut Registry) -> Result<()> {
        debug!("Inverting action: {}", self);
        match self {
            Action::Schedule { appointment } => registry.remove(appointment.id()).map(|_| ()),
            Action::Cancel { appointment } => {
                registry.add(appointment.clone());
                Ok(())
            },
            // Modify already relocated `new`, so anchor on its current index
            Action::Modify { old, new } => registry.replace(new.id(), old.clone()).map(|_| ()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Schedule { appointment } => write!(f, "schedule {}", appointment),
            Action::Cancel { appointment } => write!(f, "cancel {}", appointment),
            Action::Modify { old, new } => write!(f, "modify {} -> {}", old, new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::AppointmentIds;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn appointment(ids: &mut AppointmentIds, name: &str, y: i32, m: u32, d: u32) -> Appointment {
        Appointment::new(ids.next(), name, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn listing(registry: &Registry) -> Vec<String> {
        registry.list().map(|(_, a)| a.to_string()).collect()
    }

    #[test]
    fn schedule_then_invert_restores_listing() {
        let mut ids = AppointmentIds::new();
        let mut registry = Registry::new();
        registry.add(appointment(&mut ids, "Ana", 2024, 1, 10));
        let before = listing(&registry);

        let action = Action::Schedule {
            appointment: appointment(&mut ids, "Beto", 2024, 2, 5),
        };
        action.apply(&mut registry).unwrap();
        assert_eq!(registry.len(), 2);

        action.invert(&mut registry).unwrap();
        assert_eq!(listing(&registry), before);
    }

    #[test]
    fn cancel_then_invert_restores_membership_at_end() {
        let mut ids = AppointmentIds::new();
        let mut registry = Registry::new();
        let ana = appointment(&mut ids, "Ana", 2024, 1, 10);
        registry.add(ana.clone());
        registry.add(appointment(&mut ids, "Beto", 2024, 2, 5));

        let action = Action::Cancel {
            appointment: ana.clone(),
        };
        action.apply(&mut registry).unwrap();
        assert_eq!(listing(&registry), vec!["Beto, 2024-02-05"]);

        action.invert(&mut registry).unwrap();
        // Re-insertion appends; membership is restored but not the index
        assert_eq!(listing(&registry), vec!["Beto, 2024-02-05", "Ana, 2024-01-10"]);
    }

    #[test]
    fn modify_invert_restores_old_at_new_index_and_reapply_reproduces() {
        let mut ids = AppointmentIds::new();
        let mut registry = Registry::new();
        registry.add(appointment(&mut ids, "Ana", 2024, 1, 10));
        let old = appointment(&mut ids, "Beto", 2024, 2, 5);
        registry.add(old.clone());

        let new = appointment(&mut ids, "Bruno", 2024, 2, 6);
        let action = Action::Modify {
            old: old.clone(),
            new: new.clone(),
        };

        action.apply(&mut registry).unwrap();
        let after_apply = listing(&registry);
        assert_eq!(after_apply, vec!["Ana, 2024-01-10", "Bruno, 2024-02-06"]);

        action.invert(&mut registry).unwrap();
        assert_eq!(registry.get(1).unwrap().id(), old.id());
        assert_eq!(listing(&registry), vec!["Ana, 2024-01-10", "Beto, 2024-02-05"]);

        // Re-applying after undo reproduces the original post-modify state
        action.apply(&mut registry).unwrap();
        assert_eq!(listing(&registry), after_apply);
    }

    #[rstest]
    #[case::apply(false)]
    #[case::invert(true)]
    fn modify_with_missing_target_is_a_reported_no_op(#[case] inverted: bool) {
        let mut ids = AppointmentIds::new();
        let mut registry = Registry::new();
        registry.add(appointment(&mut ids, "Ana", 2024, 1, 10));

        // Neither endpoint of this modify is in the registry
        let action = Action::Modify {
            old: appointment(&mut ids, "Beto", 2024, 2, 5),
            new: appointment(&mut ids, "Bruno", 2024, 2, 6),
        };

        let before = listing(&registry);
        let result = if inverted {
            action.invert(&mut registry)
        } else {
            action.apply(&mut registry)
        };
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
        assert_eq!(listing(&registry), before);
    }

    #[test]
    fn cancel_of_missing_appointment_is_a_reported_no_op() {
        let mut ids = AppointmentIds::new();
        let mut registry = Registry::new();
        registry.add(appointment(&mut ids, "Ana", 2024, 1, 10));

        let action = Action::Cancel {
            appointment: appointment(&mut ids, "Beto", 2024, 2, 5),
        };
        let before = listing(&registry);
        assert!(matches!(
            action.apply(&mut registry).unwrap_err(),
            AppError::NotFound(_)
        ));
        assert_eq!(listing(&registry), before);
    }
}
