//! The ordered, in-memory collection of appointments.
//!
//! Insertion order is preserved and the sequence is always dense, so the
//! 1-based listing shown to the user maps directly onto positions here.
//! Lookups for removal and replacement are keyed by `AppointmentId`, never
//! by field equality: duplicate client/date pairs are permitted and remain
//! distinct bookings.
//!
//! "Not found" is a reportable condition, not a crash, and a failed
//! operation leaves the registry exactly as it was.

use crate::error::{AppError, Result};
use crate::models::{Appointment, AppointmentId};
use tracing::debug;

/// The salon's appointment book.
#[derive(Debug, Default)]
pub struct Registry {
    appointments: Vec<Appointment>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an appointment to the end of the book.
    pub fn add(&mut self, appointment: Appointment) {
        debug!("Adding appointment: {}", appointment);
        self.appointments.push(appointment);
    }

    /// Removes the appointment with the given id, returning it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no appointment carries that id; the
    /// registry is left unchanged.
    pub fn remove(&mut self, id: AppointmentId) -> Result<Appointment> {
        let index = self.position(id)?;
        let removed = self.appointments.remove(index);
        debug!("Removed appointment at index {}: {}", index, removed);
        Ok(removed)
    }

    /// Replaces the appointment with id `old` by `new`, at `old`'s current
    /// index, returning the appointment that was replaced.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if `old` is absent; no mutation happens
    /// in that case.
    pub fn replace(&mut self, old: AppointmentId, new: Appointment) -> Result<Appointment> {
        let index = self.position(old)?;
        let replaced = std::mem::replace(&mut self.appointments[index], new);
        debug!(
            "Replaced appointment at index {}: {} -> {}",
            index, replaced, self.appointments[index]
        );
        Ok(replaced)
    }

    /// Iterates over the current appointments with their 1-based positions,
    /// recomputed from current state on every call.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Appointment)> + '_ {
        self.appointments
            .iter()
            .enumerate()
            .map(|(i, appointment)| (i + 1, appointment))
    }

    /// Returns the appointment at the given 0-based index, if any.
    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.appointments.get(index)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn position(&self, id: AppointmentId) -> Result<usize> {
        self.appointments
            .iter()
            .position(|appointment| appointment.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("no appointment with id {:?}", id)))
    }
}
