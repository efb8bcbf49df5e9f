/// Main entry point for the habit tracker service
///
/// This file sets up logging, parses command line arguments, and starts the
/// JSON-RPC server. The server listens for requests over stdin/stdout, one
/// JSON-RPC message per line.

use clap::Parser;
use tracing::info;

use habit_tracker::{HabitTracker, StreakRule};

/// Command line arguments for the habit tracker service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    /// Break streaks on missed calendar days instead of only on explicit
    /// incomplete entries
    #[arg(long)]
    strict_streaks: bool,

    /// Seed the store with sample habits and thirty days of history
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting habit tracker service");

    let streak_rule = if args.strict_streaks {
        StreakRule::ConsecutiveDays
    } else {
        StreakRule::ConsecutiveEntries
    };

    let tracker = HabitTracker::new(streak_rule);

    if args.demo {
        tracker.seed_demo_data()?;
    }

    tracker.run().await?;

    info!("Habit tracker service shutdown complete");
    Ok(())
}
