// DeFi Degen Cycle Simulator Library
//
// The event-driven trading-simulation engine behind "Survive the Cycle":
// day-by-day event draws, sentiment drift, payout resolution, and XP scoring

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error; // Unified error handling
pub mod ledger; // Collaborator seams: XP, notifications, identity
pub mod policy;
pub mod progress;
pub mod report;
pub mod session;
pub mod types;
pub mod unlock; // Hidden arcade unlock predicate

// Re-export core engine types
pub use core::{CycleEngine, DayBrief, DayStep, Outcome, Phase, Run, RunSummary};

// Re-export error types
pub use error::{SimError, SimResult};

// Re-export catalog types
pub use catalog::{EventCatalog, GameEvent, Payout};

// Re-export configuration
pub use config::{Config, ConfigError, FeatureConfig, GameConfig, LoggingConfig};

// Re-export common types and constants
pub use types::{
    Action, EventKind, HistoryPoint, OutcomeKind, Sentiment, TokenSymbol, DEFAULT_XP_REWARD,
    INITIAL_BALANCE, MAX_DAYS,
};

// Re-export collaborator seams
pub use ledger::{
    Identity, LogNotifier, NoticeKind, Notifier, NullNotifier, PlayerProfile, XpLedger,
};

// Re-export run drivers and reporting
pub use analytics::{BatchAnalyzer, BatchSummary};
pub use policy::{ActionPolicy, CautiousStake, FixedStake, IgnoreAll, RandomStake};
pub use report::RunReport;
pub use session::{autoplay, autoplay_with};
