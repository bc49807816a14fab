// Collaborator seams: XP ledger, notification sink, identity
//
// The engine only sees these traits; the hosting surface decides what
// stands behind them.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Destructive,
}

/// Fire-and-forget notification sink. Must never block the caller.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str, kind: NoticeKind);
}

/// Progression ledger. Callers never see level-up thresholds.
pub trait XpLedger {
    fn add_xp(&mut self, amount: u32);
}

/// Read-only player identity.
pub trait Identity {
    fn username(&self) -> String;
}

/// XP needed to clear the given level.
pub fn xp_to_next_level(level: u32) -> f64 {
    150.0 * (level.max(1) as f64).powf(1.5)
}

/// Player progression state: username, level, and XP toward the next level.
/// XP spills over on level-up, and a single grant can clear several levels.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    username: String,
    level: u32,
    xp: f64,
    next_level_xp: f64,
}

impl PlayerProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            level: 1,
            xp: 0.0,
            next_level_xp: xp_to_next_level(1),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> f64 {
        self.xp
    }

    pub fn next_level_xp(&self) -> f64 {
        self.next_level_xp
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Add XP and return the levels reached, lowest first.
    pub fn grant(&mut self, amount: u32) -> Vec<u32> {
        self.xp += amount as f64;

        let mut reached = Vec::new();
        while self.xp >= self.next_level_xp {
            self.level += 1;
            self.xp -= self.next_level_xp;
            self.next_level_xp = xp_to_next_level(self.level);
            reached.push(self.level);
        }
        reached
    }
}

impl XpLedger for PlayerProfile {
    fn add_xp(&mut self, amount: u32) {
        for level in self.grant(amount) {
            info!("🎉 Level Up! {} reached level {}", self.username, level);
        }
    }
}

impl Identity for PlayerProfile {
    fn username(&self) -> String {
        self.username.clone()
    }
}

// Shared-handle impls so a host can keep reading the profile while the
// engine holds the ledger end.
impl XpLedger for Rc<RefCell<PlayerProfile>> {
    fn add_xp(&mut self, amount: u32) {
        self.borrow_mut().add_xp(amount);
    }
}

impl Identity for Rc<RefCell<PlayerProfile>> {
    fn username(&self) -> String {
        self.borrow().username.clone()
    }
}

/// Notifier that routes notices to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Warning | NoticeKind::Destructive => {
                warn!("🔔 {} — {}", title, body);
            }
            _ => {
                info!("🔔 {} — {}", title, body);
            }
        }
    }
}

/// Notifier that drops everything. Handy in tests and batch runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str, _kind: NoticeKind) {}
}
