// Scripted market event catalog
//
// Catalog entries are immutable records: drawn, never mutated. Payout
// behavior hangs off explicit tags rather than display text.

pub mod builtin;

use crate::error::{SimError, SimResult};
use crate::types::{EventKind, Sentiment, TokenSymbol};

/// How investing in an event pays out. Exactly one profile per event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payout {
    /// Full loss of the staked amount. Marks rugs, drainers, and chased pumps.
    GuaranteedLoss,
    /// Partial loss of the staked amount, regardless of sentiment.
    FixedLoss { severity: f64, ponzi_penalty: u32 },
    /// Flops in a cold market (neutral/bearish/panic), otherwise behaves
    /// like a speculative bet at `multiplier`.
    ColdMarketFlop {
        multiplier: f64,
        severity: f64,
        ponzi_penalty: u32,
    },
    /// Pays `multiplier` on the stake with no sentiment adjustment.
    GuaranteedProfit { multiplier: f64 },
    /// Pays `multiplier` adjusted by the day's sentiment, floored at break-even.
    Speculative { multiplier: f64 },
    /// Speculative, but the adjusted multiplier never drops below the
    /// event's own. Blood-in-the-streets entries reward buying the dip.
    Contrarian { multiplier: f64 },
}

impl Payout {
    pub fn is_guaranteed_loss(self) -> bool {
        matches!(self, Payout::GuaranteedLoss)
    }

    pub fn is_guaranteed_profit(self) -> bool {
        matches!(self, Payout::GuaranteedProfit { .. })
    }
}

/// One predefined scenario the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameEvent {
    pub id: u32,
    pub kind: EventKind,
    pub title: &'static str,
    pub description: &'static str,
    pub token: Option<TokenSymbol>,
    pub potential_gain: Option<&'static str>,
    /// Forces the day's sentiment when present, overriding the roll.
    pub sentiment_effect: Option<Sentiment>,
    pub high_risk: bool,
    /// Narrative flag: the damage was already done before the player saw it.
    pub delayed_effect: bool,
    pub payout: Payout,
    /// Post-hoc educational hint shown with the outcome.
    pub clue: Option<&'static str>,
    /// Exact setback wording for non-rug losses.
    pub setback_note: Option<&'static str>,
}

impl GameEvent {
    /// Streak-breaker classification: unwinnable scam/exploit entries.
    pub fn is_highly_negative(&self) -> bool {
        self.payout.is_guaranteed_loss()
            && matches!(
                self.kind,
                EventKind::ScamOpportunity | EventKind::Exploit
            )
    }
}

/// Immutable set of events a run draws from.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<GameEvent>,
}

impl EventCatalog {
    /// The full builtin catalog.
    pub fn builtin() -> Self {
        Self {
            events: builtin::MOCK_EVENTS.to_vec(),
        }
    }

    /// Build a catalog from explicit events. Ids must be unique.
    pub fn from_events(events: Vec<GameEvent>) -> SimResult<Self> {
        if events.is_empty() {
            return Err(SimError::EmptyCatalog);
        }
        let catalog = Self { events };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: u32) -> SimResult<&GameEvent> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(SimError::UnknownEvent(id))
    }

    fn validate(&self) -> SimResult<()> {
        let mut seen = std::collections::HashSet::new();
        for event in &self.events {
            if !seen.insert(event.id) {
                return Err(SimError::Internal(format!(
                    "duplicate event id in catalog: {}",
                    event.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
