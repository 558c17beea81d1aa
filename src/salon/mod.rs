//! The in-memory appointment registry for the salon.
//!
//! Holds the ordered collection of appointments that actions mutate and
//! the interaction loop displays.

mod registry;

pub use registry::*;
