//! Unified error handling for the cycle simulator
//!
//! A single error type covers the engine, configuration, and report
//! plumbing so callers never deal with Box<dyn Error>.

use std::fmt;
use std::io;

/// Main error type for the simulator
#[derive(Debug)]
pub enum SimError {
    // Configuration errors
    ConfigNotFound(String),
    ConfigParse(String),
    ConfigValidation(String),

    // Engine phase errors
    RunNotStarted,
    RunAlreadyFinished,
    NoPendingEvent,
    ActionAlreadyResolved,
    EventPending,

    // Input validation errors
    InvalidPercent(u8),

    // Catalog errors
    EmptyCatalog,
    UnknownEvent(u32),

    // IO / report errors
    FileRead(String),
    FileWrite(String),
    ReportSerialize(String),

    // General errors
    Internal(String),
}

impl SimError {
    /// Get error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            SimError::ConfigNotFound(_)
            | SimError::ConfigParse(_)
            | SimError::ConfigValidation(_) => "config",

            SimError::RunNotStarted
            | SimError::RunAlreadyFinished
            | SimError::NoPendingEvent
            | SimError::ActionAlreadyResolved
            | SimError::EventPending => "phase",

            SimError::InvalidPercent(_) => "validation",

            SimError::EmptyCatalog | SimError::UnknownEvent(_) => "catalog",

            SimError::FileRead(_) | SimError::FileWrite(_) | SimError::ReportSerialize(_) => "io",

            SimError::Internal(_) => "internal",
        }
    }

    /// Get a user-friendly error message with helpful context
    pub fn user_message(&self) -> String {
        match self {
            SimError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    💡 Quick fix:\n\
                    1. Run: degen-cycle init\n\
                    2. Adjust config.toml if needed\n\
                    3. Try again",
                    path
                )
            }
            SimError::ConfigValidation(msg) => {
                format!(
                    "Configuration validation error: {}\n\n\
                    💡 Check config.toml for:\n\
                    - Positive balance and day counts\n\
                    - XP reward greater than zero",
                    msg
                )
            }
            SimError::InvalidPercent(p) => {
                format!(
                    "Investment percent {} is out of range\n\n\
                    💡 Pick a value between 0 and 100",
                    p
                )
            }
            SimError::NoPendingEvent => "No event is awaiting a decision\n\n\
                💡 Advance the run first, then choose Invest or Ignore"
                .to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            SimError::ConfigParse(msg) => {
                write!(f, "Configuration parse error: {}", msg)
            }
            SimError::ConfigValidation(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }

            SimError::RunNotStarted => {
                write!(f, "Run has not been started")
            }
            SimError::RunAlreadyFinished => {
                write!(f, "Run is already finished")
            }
            SimError::NoPendingEvent => {
                write!(f, "No event is awaiting a decision")
            }
            SimError::ActionAlreadyResolved => {
                write!(
                    f,
                    "Today's action is already resolved; continue to the next day"
                )
            }

            SimError::EventPending => {
                write!(f, "An event is awaiting a decision; resolve it before advancing")
            }

            SimError::InvalidPercent(p) => {
                write!(f, "Investment percent out of range [0, 100]: {}", p)
            }

            SimError::EmptyCatalog => {
                write!(f, "Event catalog is empty")
            }
            SimError::UnknownEvent(id) => {
                write!(f, "Unknown event id: {}", id)
            }

            SimError::FileRead(msg) => {
                write!(f, "File read error: {}", msg)
            }
            SimError::FileWrite(msg) => {
                write!(f, "File write error: {}", msg)
            }
            SimError::ReportSerialize(msg) => {
                write!(f, "Report serialization error: {}", msg)
            }

            SimError::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SimError {}

// Conversion implementations for common error types

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SimError::ConfigNotFound(err.to_string()),
            io::ErrorKind::PermissionDenied => SimError::FileRead(err.to_string()),
            _ => SimError::Internal(format!("IO error: {}", err)),
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::ReportSerialize(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::ConfigParse(format!("TOML parse error: {}", err))
    }
}

impl From<crate::config::ConfigError> for SimError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::FileRead(msg) => SimError::ConfigNotFound(msg),
            ConfigError::FileWrite(msg) => SimError::FileWrite(msg),
            ConfigError::Parse(msg) => SimError::ConfigParse(msg),
            ConfigError::Serialize(msg) => SimError::ConfigParse(msg),
            ConfigError::Validation(msg) => SimError::ConfigValidation(msg),
        }
    }
}

impl From<String> for SimError {
    fn from(msg: String) -> Self {
        SimError::Internal(msg)
    }
}

impl From<&str> for SimError {
    fn from(msg: &str) -> Self {
        SimError::Internal(msg.to_string())
    }
}

/// Result type alias using SimError
pub type SimResult<T> = Result<T, SimError>;
