//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, handling user interaction (prompts, menus),
//! and the application state driving the interactive session.

mod commands;
pub mod prompts;

pub use commands::*;
