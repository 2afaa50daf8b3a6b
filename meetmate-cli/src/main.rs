mod commands;
mod render;
mod tui;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use meetmate_core::{DateRange, WorkWindow, parse_time_zone};

const TOKEN_ENV: &str = "MEETMATE_GOOGLE_TOKEN";

#[derive(Parser)]
#[command(name = "meetmate")]
#[command(about = "Find free meeting slots across your Google calendars")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every lookup command
#[derive(Args)]
struct LookupArgs {
    /// First day of the search range (YYYY-MM-DD)
    #[arg(long)]
    from: String,

    /// Last day of the search range, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: String,

    /// IANA timezone for the search
    #[arg(long, default_value = "Asia/Tokyo")]
    timezone: String,

    /// Calendar id to consider; repeat for several (defaults to "primary")
    #[arg(short, long = "calendar")]
    calendars: Vec<String>,

    /// Delegated OAuth access token (falls back to $MEETMATE_GOOGLE_TOKEN)
    #[arg(long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show free slots within the daily work window
    Slots {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Start of the daily work window (HH:MM)
        #[arg(long, default_value = "10:00")]
        work_start: String,

        /// End of the daily work window (HH:MM)
        #[arg(long, default_value = "18:00")]
        work_end: String,

        /// Minimum slot length in minutes
        #[arg(short, long, default_value_t = 60)]
        duration: i64,
    },
    /// Show the raw busy intervals reported per calendar
    Busy {
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            lookup,
            work_start,
            work_end,
            duration,
        } => {
            let token = resolve_token(lookup.token)?;
            let range = DateRange::from_args(&lookup.from, &lookup.to)?;
            let window = WorkWindow::from_args(&work_start, &work_end)?;
            let time_zone = parse_time_zone(&lookup.timezone)?;
            commands::slots::run(token, range, window, duration, time_zone, lookup.calendars)
                .await
        }
        Commands::Busy { lookup } => {
            let token = resolve_token(lookup.token)?;
            let range = DateRange::from_args(&lookup.from, &lookup.to)?;
            let time_zone = parse_time_zone(&lookup.timezone)?;
            commands::busy::run(token, range, time_zone, lookup.calendars).await
        }
    }
}

fn resolve_token(arg: Option<String>) -> Result<String> {
    if let Some(token) = arg {
        if !token.is_empty() {
            return Ok(token);
        }
    }

    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => anyhow::bail!(
            "No access token found.\n\n\
            Pass one with --token, or export it:\n  \
            export {}=<delegated access token>",
            TOKEN_ENV
        ),
    }
}
