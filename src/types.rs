// Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse market mood. Influences payout multipliers and is re-rolled
/// from the full distribution every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Euphoric,
    Bullish,
    Neutral,
    Bearish,
    Panic,
}

impl Sentiment {
    /// Multiplier applied to speculative payouts under this mood.
    pub fn payout_multiplier(self) -> f64 {
        match self {
            Sentiment::Euphoric => 1.1,
            Sentiment::Bullish => 1.2,
            Sentiment::Neutral => 1.0,
            Sentiment::Bearish => 0.8,
            Sentiment::Panic => 0.7,
        }
    }

    /// Moods in which speculative NFT mints flop instead of pumping.
    pub fn is_cold(self) -> bool {
        matches!(
            self,
            Sentiment::Neutral | Sentiment::Bearish | Sentiment::Panic
        )
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Euphoric => "euphoric",
            Sentiment::Bullish => "bullish",
            Sentiment::Neutral => "neutral",
            Sentiment::Bearish => "bearish",
            Sentiment::Panic => "panic",
        };
        write!(f, "{}", s)
    }
}

/// Narrative category of a scripted market event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Rumor,
    Tweet,
    MarketShift,
    ScamOpportunity,
    News,
    NftOpportunity,
    DaoDrama,
    Exploit,
    UtilityLaunch,
    Microcap,
    PositiveDevelopment,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Rumor => "rumor",
            EventKind::Tweet => "tweet",
            EventKind::MarketShift => "market shift",
            EventKind::ScamOpportunity => "scam opportunity",
            EventKind::News => "news",
            EventKind::NftOpportunity => "NFT opportunity",
            EventKind::DaoDrama => "DAO drama",
            EventKind::Exploit => "exploit",
            EventKind::UtilityLaunch => "utility launch",
            EventKind::Microcap => "microcap",
            EventKind::PositiveDevelopment => "positive development",
        };
        write!(f, "{}", s)
    }
}

/// Mock tokens referenced by catalog events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenSymbol {
    Garbage,
    Clown,
    Safe,
    Xyz,
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenSymbol::Garbage => "GARBAGE",
            TokenSymbol::Clown => "CLOWN",
            TokenSymbol::Safe => "SAFE",
            TokenSymbol::Xyz => "XYZ",
        };
        write!(f, "{}", s)
    }
}

/// Player decision for the day's event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stake this percentage of the current balance, 0..=100.
    Invest { percent: u8 },
    Ignore,
}

/// How a resolved day went for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Positive,
    Negative,
    Neutral,
}

/// One point on the portfolio value curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub day: u32,
    pub value: f64,
}

// Game constants
pub const MAX_DAYS: u32 = 30;
pub const INITIAL_BALANCE: f64 = 1000.0;
pub const DEFAULT_XP_REWARD: u32 = 150;
/// Fixed reference stake used to report what ignoring an event would have
/// cost or earned. Independent of the player's chosen percent.
pub const IGNORE_REFERENCE_STAKE: f64 = 0.25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_multipliers() {
        assert_eq!(Sentiment::Neutral.payout_multiplier(), 1.0);
        assert!(Sentiment::Bullish.payout_multiplier() > 1.0);
        assert!(Sentiment::Panic.payout_multiplier() < 1.0);
    }

    #[test]
    fn test_cold_market_classification() {
        assert!(Sentiment::Panic.is_cold());
        assert!(Sentiment::Neutral.is_cold());
        assert!(!Sentiment::Euphoric.is_cold());
        assert!(!Sentiment::Bullish.is_cold());
    }

    #[test]
    fn test_sentiment_serde_round_trip() {
        let json = serde_json::to_string(&Sentiment::Euphoric).unwrap();
        assert_eq!(json, "\"euphoric\"");
        let back: Sentiment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sentiment::Euphoric);
    }
}
