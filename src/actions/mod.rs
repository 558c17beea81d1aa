//! The undoable units of work and the history that records them.
//!
//! Every user-visible mutation of the registry goes through an [`Action`],
//! which knows how to apply itself and how to invert itself. Applied actions
//! are pushed onto the [`History`] stack, from which the most recent one can
//! be popped and inverted exactly once.

mod command;
mod history;

pub use command::*;
pub use history::*;
