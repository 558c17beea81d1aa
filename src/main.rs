mod actions;
mod cli;
mod error;
mod models;
mod salon;

use clap::Parser;
use cli::{prompts, App, Command};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use error::Result;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Interactive appointment book for a nail salon, with single-level undo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    info!("Initializing appointment book...");
    let mut app = App::new()?;

    if !cli.no_banner {
        print_banner(app.salon_name());
    }

    // Main interactive loop
    loop {
        let options = &[
            "Schedule an appointment",
            "Modify an appointment",
            "Cancel an appointment",
            "Show appointments",
            "Undo last action",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(options)
            .default(0)
            .interact_opt()? // Use interact_opt to handle potential cancellation (e.g., Ctrl+C)
            .unwrap_or(options.len() - 1); // Default to Exit if cancelled

        println!();

        // Handle the user's choice
        let command_result = match selection {
            0 => {
                let client = match prompts::prompt_client_name() {
                    Ok(c) => c,
                    Err(e) => {
                        println!("{} {}", "Failed to get client name:".red(), e);
                        continue;
                    },
                };
                let date = match prompts::prompt_date("Appointment date", app.date_format()) {
                    Ok(d) => d,
                    Err(e) => {
                        println!("{} {}", "Failed to get date:".red(), e);
                        continue;
                    },
                };
                app.run_command(Command::Schedule { client, date })
            },
            1 => {
                if app.registry().is_empty() {
                    println!("{}", "No appointments scheduled to modify.".yellow());
                    continue;
                }
                let index = match prompts::prompt_appointment(
                    app.registry(),
                    "Which appointment would you like to modify?",
                    app.date_format(),
                ) {
                    Ok(i) => i,
                    Err(e) => {
                        println!("{} {}", "Failed to get selection:".red(), e);
                        continue;
                    },
                };
                let client = match prompts::prompt_client_name() {
                    Ok(c) => c,
                    Err(e) => {
                        println!("{} {}", "Failed to get client name:".red(), e);
                        continue;
                    },
                };
                let date = match prompts::prompt_date("New appointment date", app.date_format()) {
                    Ok(d) => d,
                    Err(e) => {
                        println!("{} {}", "Failed to get date:".red(), e);
                        continue;
                    },
                };
                app.run_command(Command::Modify {
                    index,
                    client,
                    date,
                })
            },
            2 => {
                if app.registry().is_empty() {
                    println!("{}", "No appointments scheduled to cancel.".yellow());
                    continue;
                }
                match prompts::prompt_appointment(
                    app.registry(),
                    "Which appointment would you like to cancel?",
                    app.date_format(),
                ) {
                    Ok(index) => app.run_command(Command::Cancel { index }),
                    Err(e) => {
                        println!("{} {}", "Failed to get selection:".red(), e);
                        continue;
                    },
                }
            },
            3 => app.run_command(Command::List),
            4 => {
                if app.history().is_empty() {
                    println!("{}", "No actions to undo.".yellow());
                    continue;
                }
                app.run_command(Command::Undo)
            },
            5 => {
                countdown_exit()?;
                break; // Exit the loop
            },
            _ => unreachable!(), // Should not happen with the current setup
        };

        // Handle potential errors from command execution
        if let Err(e) = command_result {
            error!("Command execution failed: {:?}", e);
            println!("{} {}", "Error:".red(), e.to_string().red());
        }

        println!();
    }

    Ok(())
}

fn print_banner(salon_name: &str) {
    println!(
        "{}",
        r"      _ _
  ___(_) |_ __ _ ___
 / __| | __/ _` / __|
| (__| | || (_| \__ \
 \___|_|\__\__,_|___/"
            .magenta()
    );
    println!(
        "{}",
        format!("Welcome to the {} appointment book!", salon_name)
            .cyan()
            .bold()
    );
    println!();
}

/// Brief goodbye countdown before the process exits.
fn countdown_exit() -> Result<()> {
    print!("{}", "Closing the appointment book".green());
    for _ in 0..3 {
        print!("{}", ".".green());
        std::io::stdout().flush()?;
        thread::sleep(Duration::from_millis(400));
    }
    println!(" {}", "Goodbye!".green().bold());
    Ok(())
}
