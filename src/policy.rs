// Autoplay policies for headless runs

use rand::Rng;

use crate::catalog::GameEvent;
use crate::core::run::Run;
use crate::error::{SimError, SimResult};
use crate::types::Action;

/// Decides the player action for each presented event. Policies drive
/// unattended runs; an interactive host asks the human instead.
pub trait ActionPolicy {
    fn decide(&mut self, event: &GameEvent, run: &Run) -> Action;
    fn name(&self) -> &'static str;
}

/// Never invests. The baseline survivor.
pub struct IgnoreAll;

impl ActionPolicy for IgnoreAll {
    fn decide(&mut self, _event: &GameEvent, _run: &Run) -> Action {
        Action::Ignore
    }

    fn name(&self) -> &'static str {
        "ignore"
    }
}

/// Invests the same share of the balance every single day.
pub struct FixedStake {
    pub percent: u8,
}

impl ActionPolicy for FixedStake {
    fn decide(&mut self, _event: &GameEvent, _run: &Run) -> Action {
        Action::Invest {
            percent: self.percent,
        }
    }

    fn name(&self) -> &'static str {
        "steady"
    }
}

/// Invests a fixed share, but sits out events flagged high risk.
pub struct CautiousStake {
    pub percent: u8,
}

impl ActionPolicy for CautiousStake {
    fn decide(&mut self, event: &GameEvent, _run: &Run) -> Action {
        if event.high_risk {
            Action::Ignore
        } else {
            Action::Invest {
                percent: self.percent,
            }
        }
    }

    fn name(&self) -> &'static str {
        "cautious"
    }
}

/// Coin-flips every event and sizes the stake at random. The degen.
pub struct RandomStake<R: Rng> {
    pub rng: R,
    pub max_percent: u8,
}

impl<R: Rng> ActionPolicy for RandomStake<R> {
    fn decide(&mut self, _event: &GameEvent, _run: &Run) -> Action {
        if self.rng.gen_bool(0.5) {
            Action::Invest {
                percent: self.rng.gen_range(0..=self.max_percent),
            }
        } else {
            Action::Ignore
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Resolve a policy by its CLI name.
pub fn policy_by_name<R: Rng + 'static>(
    name: &str,
    percent: u8,
    rng: R,
) -> SimResult<Box<dyn ActionPolicy>> {
    match name {
        "ignore" => Ok(Box::new(IgnoreAll)),
        "steady" => Ok(Box::new(FixedStake { percent })),
        "cautious" => Ok(Box::new(CautiousStake { percent })),
        "degen" => Ok(Box::new(FixedStake { percent: 100 })),
        "random" => Ok(Box::new(RandomStake {
            rng,
            max_percent: 100,
        })),
        other => Err(SimError::Internal(format!("unknown policy: {}", other))),
    }
}
