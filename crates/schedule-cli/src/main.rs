//! `gymsched` CLI — check training availability and list free slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check a scheduling request (stdin → verdict)
//! cat request.json | gymsched check
//!
//! # Check from a file
//! gymsched check -i request.json
//!
//! # List free slots for a set of bookings within a window
//! gymsched free -i bookings.json --from 1760000000 --to 1760086400
//!
//! # First slot long enough for a one-hour session
//! gymsched free -i bookings.json --from 1760000000 --to 1760086400 --min-secs 3600
//! ```
//!
//! Exit codes: 0 = free, 1 = occupied / no slot found, 2 = invalid input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schedule_engine::{
    check_trainer_and_location_availability, find_first_free_slot, find_free_slots, Interval,
    LocationId, ScheduleConflict, TrainerId, TrainingSlot,
};
use serde::Deserialize;
use std::io::Read;
use std::process;

#[derive(Parser)]
#[command(name = "gymsched", version, about = "Gym training schedule checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a proposed training against existing bookings
    Check {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List free slots for a set of bookings within a time window
    Free {
        /// Input bookings file, a JSON array of intervals (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Window start, epoch seconds
        #[arg(long)]
        from: i64,
        /// Window end, epoch seconds
        #[arg(long)]
        to: i64,
        /// Only report the first slot of at least this many seconds
        #[arg(long)]
        min_secs: Option<i64>,
    },
}

/// A full availability request as the backend would assemble it: the proposed
/// slot, the resources it ties up, and the candidate trainings the caller
/// already loaded for the relevant date window.
#[derive(Debug, Deserialize)]
struct CheckRequest {
    proposed: Interval,
    trainers: Vec<TrainerId>,
    location: LocationId,
    #[serde(default)]
    group_trainings: Vec<TrainingSlot>,
    #[serde(default)]
    individual_trainings: Vec<TrainingSlot>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let raw = read_input(input.as_deref())?;
            let request: CheckRequest =
                serde_json::from_str(&raw).context("Failed to parse check request JSON")?;

            let verdict = check_trainer_and_location_availability(
                &request.proposed,
                &request.trainers,
                request.location,
                &request.group_trainings,
                &request.individual_trainings,
            );

            match verdict {
                Ok(()) => println!("free"),
                Err(conflict @ ScheduleConflict::InvalidInterval { .. }) => {
                    eprintln!("{}", conflict);
                    process::exit(2);
                }
                Err(conflict) => {
                    println!("{}", conflict);
                    process::exit(1);
                }
            }
        }
        Commands::Free {
            input,
            from,
            to,
            min_secs,
        } => {
            let raw = read_input(input.as_deref())?;
            let bookings: Vec<Interval> =
                serde_json::from_str(&raw).context("Failed to parse bookings JSON")?;

            let window = match Interval::new(from, to) {
                Ok(window) => window,
                Err(conflict) => {
                    eprintln!("{}", conflict);
                    process::exit(2);
                }
            };

            match min_secs {
                Some(min) => match find_first_free_slot(&bookings, &window, min) {
                    Some(slot) => println!("{}", serde_json::to_string_pretty(&slot)?),
                    None => {
                        println!("no free slot of at least {} seconds", min);
                        process::exit(1);
                    }
                },
                None => {
                    let free = find_free_slots(&bookings, &window);
                    println!("{}", serde_json::to_string_pretty(&free)?);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
