//! Defines data structures for the application.
//!
//! Includes the `Appointment` record, its opaque `AppointmentId`, and the
//! session-owned `AppointmentIds` generator that hands out fresh ids.

mod appointment;

pub use appointment::*;
