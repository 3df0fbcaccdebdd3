use thiserror::Error;

use crate::cli::Cli;

/// Largest duration that still fits in u32 seconds.
pub const MAX_MINUTES: u32 = u32::MAX / 60;

/// Largest session count whose cycle length (sessions * 2) fits in u32.
pub const MAX_SESSIONS: u32 = u32::MAX / 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{flag} must be a positive integer (got {value})")]
    NotPositive { flag: &'static str, value: u32 },
    #[error("{flag} is too large (got {value}, max {max})")]
    TooLarge {
        flag: &'static str,
        value: u32,
        max: u32,
    },
}

/// Validated startup configuration. Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    /// Work sessions before a long break becomes eligible
    pub sessions_per_cycle: u32,
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
}

impl TimerConfig {
    pub fn new(
        sessions_per_cycle: u32,
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
    ) -> Result<Self, ConfigError> {
        let bounded = |flag: &'static str, value: u32, max: u32| {
            if value == 0 {
                Err(ConfigError::NotPositive { flag, value })
            } else if value > max {
                Err(ConfigError::TooLarge { flag, value, max })
            } else {
                Ok(value)
            }
        };

        Ok(Self {
            sessions_per_cycle: bounded("--sessions", sessions_per_cycle, MAX_SESSIONS)?,
            work_minutes: bounded("--work", work_minutes, MAX_MINUTES)?,
            short_break_minutes: bounded("--short-break", short_break_minutes, MAX_MINUTES)?,
            long_break_minutes: bounded("--long-break", long_break_minutes, MAX_MINUTES)?,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(cli.sessions, cli.work, cli.short_break, cli.long_break)
    }
}
