use crate::actions::{Action, History};
use crate::error::{AppError, Result};
use crate::models::{Appointment, AppointmentIds};
use crate::salon::Registry;
use chrono::NaiveDate;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::env;
use tracing::info;

/// Default strftime format for appointment dates, dd/mm/yyyy.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A fully parsed user request, ready to run against the session state.
///
/// Indexes are 0-based positions into the current registry listing; the
/// prompts layer produces them from the user's 1-based selection.
#[derive(Debug, Clone)]
pub enum Command {
    /// Book a new appointment.
    Schedule { client: String, date: NaiveDate },

    /// Rebook the appointment at `index` with a new client name and date.
    Modify {
        index: usize,
        client: String,
        date: NaiveDate,
    },

    /// Cancel the appointment at `index`.
    Cancel { index: usize },

    /// Show the current appointment book.
    List,

    /// Undo the most recent schedule/modify/cancel.
    Undo,
}

/// CLI application: the one session context owning the registry, the
/// action history, and the id generator. Constructed at startup and driven
/// by the interactive loop; no process-wide state.
pub struct App {
    registry: Registry,
    history: History,
    ids: AppointmentIds,
    salon_name: String,
    date_format: String,
}

impl App {
    /// Creates the session context, reading configuration from the
    /// environment (`CITAS_SALON_NAME`, `CITAS_DATE_FORMAT`).
    pub fn new() -> Result<Self> {
        // Load environment variables
        dotenv::dotenv().ok();

        let salon_name =
            env::var("CITAS_SALON_NAME").unwrap_or_else(|_| "Nail Salon".to_string());
        let date_format =
            env::var("CITAS_DATE_FORMAT").unwrap_or_else(|_| DEFAULT_DATE_FORMAT.to_string());

        Ok(Self {
            registry: Registry::new(),
            history: History::new(),
            ids: AppointmentIds::new(),
            salon_name,
            date_format,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn salon_name(&self) -> &str {
        &self.salon_name
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Runs one command to completion against the session state.
    pub fn run_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Schedule { client, date } => self.schedule(client, date),
            Command::Modify {
                index,
                client,
                date,
            } => self.modify(index, client, date),
            Command::Cancel { index } => self.cancel(index),
            Command::List => {
                self.list();
                Ok(())
            },
            Command::Undo => self.undo(),
        }
    }

    fn schedule(&mut self, client: String, date: NaiveDate) -> Result<()> {
        let appointment = Appointment::new(self.ids.next(), client, date);
        let action = Action::Schedule {
            appointment: appointment.clone(),
        };
        action.apply(&mut self.registry)?;
        info!("Scheduled appointment: {}", appointment);
        println!(
            "{}",
            format!(
                "Appointment scheduled for {} on {}",
                appointment.client_name(),
                appointment.date().format(&self.date_format)
            )
            .green()
        );
        self.history.record(action);
        Ok(())
    }

    fn modify(&mut self, index: usize, client: String, date: NaiveDate) -> Result<()> {
        let old = self.selected(index)?.clone();
        let new = Appointment::new(self.ids.next(), client, date);
        let action = Action::Modify {
            old: old.clone(),
            new: new.clone(),
        };
        action.apply(&mut self.registry)?;
        info!("Modified appointment: {} -> {}", old, new);
        println!(
            "{}",
            format!(
                "Appointment changed from {} on {} to {} on {}",
                old.client_name(),
                old.date().format(&self.date_format),
                new.client_name(),
                new.date().format(&self.date_format)
            )
            .green()
        );
        self.history.record(action);
        Ok(())
    }

    fn cancel(&mut self, index: usize) -> Result<()> {
        let appointment = self.selected(index)?.clone();
        let action = Action::Cancel {
            appointment: appointment.clone(),
        };
        action.apply(&mut self.registry)?;
        info!("Cancelled appointment: {}", appointment);
        println!(
            "{}",
            format!(
                "Appointment cancelled for {} on {}",
                appointment.client_name(),
                appointment.date().format(&self.date_format)
            )
            .green()
        );
        self.history.record(action);
        Ok(())
    }

    fn list(&self) {
        if self.registry.is_empty() {
            println!("{}", "No appointments scheduled.".yellow());
            return;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["#", "Client", "Date"]);
        for (position, appointment) in self.registry.list() {
            table.add_row(vec![
                position.to_string(),
                appointment.client_name().to_string(),
                appointment.date().format(&self.date_format).to_string(),
            ]);
        }
        println!("{table}");
        println!("Total appointments: {}", self.registry.len());
    }

    fn undo(&mut self) -> Result<()> {
        let undone = self.history.undo_last(&mut self.registry)?;
        info!(
            "Undid action: {} ({} remaining in history)",
            undone,
            self.history.len()
        );
        println!("{}", format!("Undone: {}", undone).green());
        Ok(())
    }

    fn selected(&self, index: usize) -> Result<&Appointment> {
        self.registry.get(index).ok_or_else(|| {
            AppError::Cli(format!("No appointment at position {}", index + 1))
        })
    }
}
