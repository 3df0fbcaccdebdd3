use clap::Parser;

mod cli;
mod config;
mod scheduler;
mod tui;

use cli::Cli;
use config::TimerConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Reject bad durations before any terminal state exists
    let config = TimerConfig::from_cli(&cli)?;

    println!("Starting a {}-minute Pomodoro session...", config.work_minutes);
    tui::run_tui(config)?;

    Ok(())
}
