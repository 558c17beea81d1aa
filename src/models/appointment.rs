//! The appointment record and its identity scheme.
//!
//! Registry and action lookups never compare appointments by field value:
//! two appointments with the same client and date are distinct bookings.
//! Each appointment is stamped with an opaque `AppointmentId` at creation,
//! and all removal/replacement is keyed on that id. Cloning an appointment
//! preserves its id, so a clone refers to the same booking.

use chrono::NaiveDate;
use std::fmt;

/// Opaque, stable identifier assigned to an appointment at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(u64);

/// A single salon appointment: a client name and a calendar date.
///
/// Pure value holder; validation of the name and date is the CLI layer's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: AppointmentId,
    client_name: String,
    date: NaiveDate,
}

impl Appointment {
    pub fn new(id: AppointmentId, client_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            client_name: client_name.into(),
            date,
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaiveDate's Display is ISO 8601 (YYYY-MM-DD)
        write!(f, "{}, {}", self.client_name, self.date)
    }
}

/// Generator for fresh appointment ids, owned by the session context.
///
/// Ids are unique within a process run; there is no persistence, so no
/// cross-run stability is needed.
#[derive(Debug, Default)]
pub struct AppointmentIds {
    next: u64,
}

impl AppointmentIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> AppointmentId {
        let id = AppointmentId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let mut ids = AppointmentIds::new();
        let a = ids.next();
        let b = ids.next();
        assert_ne!(a, b);

        let appt = Appointment::new(a, "Ana", date(2024, 1, 10));
        let clone = appt.clone();
        // A clone is the same booking, not a new one
        assert_eq!(appt.id(), clone.id());
    }

    #[test]
    fn equal_fields_do_not_imply_same_identity() {
        let mut ids = AppointmentIds::new();
        let first = Appointment::new(ids.next(), "Ana", date(2024, 1, 10));
        let second = Appointment::new(ids.next(), "Ana", date(2024, 1, 10));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn display_shows_client_and_iso_date() {
        let mut ids = AppointmentIds::new();
        let appt = Appointment::new(ids.next(), "Ana", date(2024, 1, 10));
        assert_eq!(appt.to_string(), "Ana, 2024-01-10");
    }
}
