// Common test utilities and helpers

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use degen_cycle_sim::{
    Config, CycleEngine, EventCatalog, EventKind, GameConfig, GameEvent, LoggingConfig, NoticeKind,
    Notifier, Payout, XpLedger,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create a test configuration with quiet logging
pub fn create_test_config() -> Config {
    Config {
        game: GameConfig::default(),
        features: Default::default(),
        logging: LoggingConfig {
            enable_event_logging: false,
            enable_outcome_logging: false,
            enable_sentiment_logging: false,
        },
    }
}

/// Test config with a short run for finalize-focused tests
pub fn short_run_config(max_days: u32) -> Config {
    let mut config = create_test_config();
    config.game.max_days = max_days;
    config
}

/// Ledger double that records every grant
pub struct RecordingLedger {
    pub grants: Rc<RefCell<Vec<u32>>>,
}

impl XpLedger for RecordingLedger {
    fn add_xp(&mut self, amount: u32) {
        self.grants.borrow_mut().push(amount);
    }
}

/// Returns the ledger double plus a handle to read grants afterwards
pub fn recording_ledger() -> (RecordingLedger, Rc<RefCell<Vec<u32>>>) {
    let grants = Rc::new(RefCell::new(Vec::new()));
    (
        RecordingLedger {
            grants: grants.clone(),
        },
        grants,
    )
}

/// Notifier double that records (title, body) pairs
pub struct RecordingNotifier {
    pub notices: Rc<RefCell<Vec<(String, String)>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str, _kind: NoticeKind) {
        self.notices
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}

pub fn recording_notifier() -> (RecordingNotifier, Rc<RefCell<Vec<(String, String)>>>) {
    let notices = Rc::new(RefCell::new(Vec::new()));
    (
        RecordingNotifier {
            notices: notices.clone(),
        },
        notices,
    )
}

/// Engine over the builtin catalog with a seeded generator
pub fn seeded_engine(seed: u64) -> CycleEngine<StdRng> {
    engine_with(create_test_config(), EventCatalog::builtin(), seed)
}

/// Engine over an arbitrary catalog, grants and notices discarded
pub fn engine_with(config: Config, catalog: EventCatalog, seed: u64) -> CycleEngine<StdRng> {
    let (ledger, _) = recording_ledger();
    CycleEngine::with_rng(
        config,
        catalog,
        StdRng::seed_from_u64(seed),
        Box::new(ledger),
        Box::new(degen_cycle_sim::NullNotifier),
    )
}

/// Minimal catalog event for forced-draw tests
pub fn test_event(id: u32, kind: EventKind, payout: Payout) -> GameEvent {
    GameEvent {
        id,
        kind,
        title: "Test Event",
        description: "A synthetic scenario.",
        token: None,
        potential_gain: None,
        sentiment_effect: None,
        high_risk: false,
        delayed_effect: false,
        payout,
        clue: None,
        setback_note: None,
    }
}

/// A highly negative entry: guaranteed-loss scam
pub fn scam_event(id: u32) -> GameEvent {
    let mut event = test_event(id, EventKind::ScamOpportunity, Payout::GuaranteedLoss);
    event.title = "Test Rug";
    event.high_risk = true;
    event
}

/// A calm entry: guaranteed small profit
pub fn calm_event(id: u32) -> GameEvent {
    let mut event = test_event(
        id,
        EventKind::News,
        Payout::GuaranteedProfit { multiplier: 1.2 },
    );
    event.title = "Test Good News";
    event
}
