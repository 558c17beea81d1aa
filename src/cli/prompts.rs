//! Interactive prompts for the menu loop, built on `dialoguer`.
//!
//! Field validation lives here, not in the core: names must be non-empty
//! and dates must parse against the configured format, with dialoguer
//! re-prompting on invalid input.

use crate::error::Result;
use crate::salon::Registry;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Prompts for a client name, re-prompting while the input is blank.
pub fn prompt_client_name() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Client name")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("client name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Prompts for a calendar date in the given strftime format, re-prompting
/// until it parses.
pub fn prompt_date(prompt: &str, format: &str) -> Result<NaiveDate> {
    let validation_format = format.to_string();
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} ({})", prompt, human_readable(format)))
        .validate_with(move |input: &String| -> std::result::Result<(), String> {
            NaiveDate::parse_from_str(input.trim(), &validation_format)
                .map(|_| ())
                .map_err(|e| format!("invalid date: {}", e))
        })
        .interact_text()?;
    Ok(NaiveDate::parse_from_str(raw.trim(), format)?)
}

/// Lets the user pick one of the current appointments, returning its
/// 0-based index into the registry listing.
pub fn prompt_appointment(registry: &Registry, prompt: &str, format: &str) -> Result<usize> {
    let items: Vec<String> = registry
        .list()
        .map(|(position, appointment)| {
            format!(
                "{}. {} on {}",
                position,
                appointment.client_name(),
                appointment.date().format(format)
            )
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(selection)
}

/// Renders a strftime date format as the placeholder shown to the user,
/// e.g. `%d/%m/%Y` -> `dd/mm/yyyy`.
fn human_readable(format: &str) -> String {
    format
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
        .replace("%y", "yy")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_placeholder_is_human_readable() {
        assert_eq!(human_readable("%d/%m/%Y"), "dd/mm/yyyy");
        assert_eq!(human_readable("%Y-%m-%d"), "yyyy-mm-dd");
    }
}
