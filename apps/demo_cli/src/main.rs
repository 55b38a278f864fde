use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::domain::{DriverId, RequestId};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trip_core::{BookingForm, Session};

mod config;
mod controller;
mod walkthrough;

use config::load_settings;
use controller::{
    actions::{Page, UiAction},
    orchestration::UiController,
};

#[derive(Parser, Debug)]
#[command(about = "DriveMate booking demo")]
struct Cli {
    /// Settings file; defaults to ./demo.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the eight-step guided demo end to end.
    Walkthrough,
    /// List the verified driver roster.
    Drivers,
    /// Show the admin performance summary.
    Report,
    /// Book one trip, optionally assigning and completing it.
    Book {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        pickup: Option<String>,
        #[arg(long)]
        destination: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// HH:MM
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        passengers: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        assign: Option<String>,
        #[arg(long, requires = "assign")]
        complete: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    info!(?settings, "settings loaded");

    let session = Session::with_completion_metrics(settings.completion_metrics());
    let mut ui = UiController::new(session, settings.submit_delay());

    match cli.command {
        Command::Walkthrough => {
            let entries = walkthrough::run(&mut ui).await?;
            if cli.json {
                print_json(&entries)?;
            } else {
                for entry in &entries {
                    println!("Step {}: {}", entry.step, entry.instruction);
                    let via = if entry.skipped { ", skipped" } else { "" };
                    println!(
                        "  -> {} ({}{via})",
                        entry.action,
                        describe_demo(entry.demo_after)
                    );
                    if let Some(status) = entry.request_status {
                        println!("     request status: {status}");
                    }
                    if !entry.status_line.is_empty() {
                        println!("     {}", entry.status_line);
                    }
                }
            }
        }
        Command::Drivers => {
            let drivers = ui.session().list_drivers();
            if cli.json {
                print_json(&drivers)?;
            } else {
                for driver in drivers {
                    println!(
                        "{} {:<14} licence {} rating {:.1} {}y {} trips{}",
                        driver.id,
                        driver.name,
                        driver.license_id,
                        driver.rating,
                        driver.years_experience,
                        driver.trips_completed,
                        if driver.is_verified { " [verified]" } else { "" }
                    );
                }
            }
        }
        Command::Report => {
            let report = ui.session().report();
            if cli.json {
                print_json(&report)?;
            } else {
                println!("Total trips:      {}", report.total_trips);
                println!(
                    "  pending {} / assigned {} / completed {}",
                    report.pending_trips, report.assigned_trips, report.completed_trips
                );
                println!("Distance driven:  {:.1} km", report.total_distance_km);
                println!("Hours on road:    {:.1} h", report.total_duration_hours);
                println!("Active drivers:   {}", report.active_drivers);
                match report.average_rating {
                    Some(rating) => println!("Avg. rating:      {rating:.1}"),
                    None => println!("Avg. rating:      n/a"),
                }
            }
        }
        Command::Book {
            name,
            phone,
            pickup,
            destination,
            date,
            time,
            passengers,
            notes,
            assign,
            complete,
        } => {
            let prefill = BookingForm::demo_prefill();
            let form = BookingForm {
                name: name.unwrap_or(prefill.name),
                phone: phone.unwrap_or(prefill.phone),
                pickup: pickup.unwrap_or(prefill.pickup),
                destination: destination.unwrap_or(prefill.destination),
                date: date.unwrap_or(prefill.date),
                time: time.unwrap_or(prefill.time),
                passengers: passengers
                    .map(|count| count.to_string())
                    .unwrap_or(prefill.passengers),
                notes: notes.unwrap_or_default(),
            };
            ui.dispatch(UiAction::EditForm(form)).await?;
            ui.dispatch(UiAction::SubmitBooking).await?;
            let request_id = confirmed_request(&ui)?;

            if let Some(driver_id) = assign {
                ui.dispatch(UiAction::SelectDriver {
                    request_id: request_id.clone(),
                    driver_id: DriverId::new(driver_id),
                })
                .await?;
                if complete {
                    ui.dispatch(UiAction::CompleteTrip {
                        request_id: request_id.clone(),
                    })
                    .await?;
                }
            }

            let request = ui
                .session()
                .find_request(&request_id)
                .ok_or_else(|| anyhow::anyhow!("request {request_id} vanished"))?;
            if cli.json {
                print_json(request)?;
            } else {
                println!(
                    "{} {} {} on {} at {} ({} passenger(s)): {}",
                    request.id,
                    request.customer_name,
                    request.route_label(),
                    request.date,
                    request.time.format("%H:%M"),
                    request.passengers,
                    request.status()
                );
                if let Some(driver) = ui.session().assigned_driver(&request_id) {
                    println!("  driver: {} ({})", driver.name, driver.license_id);
                }
                if let Some(metrics) = request.completed_metrics() {
                    println!(
                        "  completed: {:.1} km in {:.1} h",
                        metrics.distance_km, metrics.duration_hours
                    );
                }
            }
        }
    }

    Ok(())
}

fn confirmed_request(ui: &UiController) -> Result<RequestId> {
    match ui.page() {
        Page::Confirmation(request_id) => Ok(request_id.clone()),
        other => anyhow::bail!("booking did not reach confirmation (on {other:?})"),
    }
}

fn describe_demo(state: shared::domain::DemoState) -> String {
    if state.is_active {
        format!("now on step {}", state.current_step)
    } else {
        "tour finished".to_string()
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
