use thiserror::Error;

/// Every failure the clock wall can report to the user.
///
/// None of these are fatal: the window shows the message and keeps running.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("Time zone not found: {0}")]
    ZoneNotFound(String),
    #[error("Please select a timezone and time")]
    MainTimeNotSet,
    #[error("No clock for {0} on the wall")]
    ZoneNotOnWall(String),
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Could not parse the configuration file: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
