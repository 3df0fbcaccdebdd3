use clap::Parser;

#[derive(Parser)]
#[command(name = "tomo")]
#[command(about = "A pomodoro timer that lives in your terminal", long_about = None)]
pub struct Cli {
    /// Number of work sessions before a longer break
    #[arg(short = 'n', long = "sessions", default_value_t = 4)]
    pub sessions: u32,

    /// Work session duration in minutes
    #[arg(short, long, default_value_t = 30)]
    pub work: u32,

    /// Duration of a short break in minutes
    #[arg(short, long, default_value_t = 5)]
    pub short_break: u32,

    /// Duration of a long break in minutes
    #[arg(short, long, default_value_t = 30)]
    pub long_break: u32,
}
