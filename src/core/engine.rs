// Cycle engine orchestrator
// Owns the day-by-day state machine: event draws, sentiment drift,
// action resolution, and end-of-run scoring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::{EventCatalog, GameEvent};
use crate::config::Config;
use crate::core::resolution::{self, Outcome};
use crate::core::run::Run;
use crate::core::scoring;
use crate::core::sentiment;
use crate::error::{SimError, SimResult};
use crate::ledger::{NoticeKind, Notifier, XpLedger};
use crate::types::{Action, HistoryPoint, OutcomeKind, Sentiment};

/// Where the state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// An event is on the table; the player must Invest or Ignore.
    AwaitingAction,
    /// The day resolved; the player must continue to the next day.
    AwaitingContinue,
    Finished,
}

/// What the engine presents when a new day dawns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayBrief {
    pub day: u32,
    pub sentiment: Sentiment,
    pub event: GameEvent,
}

/// Result of advancing the run: either a fresh day or the terminal summary.
#[derive(Debug, Clone, PartialEq)]
pub enum DayStep {
    Dawn(DayBrief),
    Finished(RunSummary),
}

/// Terminal accounting for a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub days_survived: u32,
    pub final_balance: f64,
    pub ponzi_score: u32,
    pub performance_factor: f64,
    pub xp_awarded: u32,
    pub message: String,
}

/// The trading-simulation state machine. One engine instance owns one Run;
/// the hosting surface reads state and submits intents.
pub struct CycleEngine<R: Rng = StdRng> {
    config: Config,
    catalog: EventCatalog,
    rng: R,
    run: Run,
    phase: Phase,
    current_event: Option<GameEvent>,
    outcome: Option<Outcome>,
    /// Latched once XP is paid so a run never pays twice.
    completed: bool,
    ledger: Box<dyn XpLedger>,
    notifier: Box<dyn Notifier>,
}

impl CycleEngine<StdRng> {
    /// Create an engine with an entropy-seeded generator.
    pub fn new(
        config: Config,
        catalog: EventCatalog,
        ledger: Box<dyn XpLedger>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self::with_rng(config, catalog, StdRng::from_entropy(), ledger, notifier)
    }
}

impl<R: Rng> CycleEngine<R> {
    /// Create an engine with an injected generator. Tests seed this for
    /// reproducible draws.
    pub fn with_rng(
        config: Config,
        catalog: EventCatalog,
        rng: R,
        ledger: Box<dyn XpLedger>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let run = Run::new(config.game.initial_balance, config.game.max_days);
        Self {
            config,
            catalog,
            rng,
            run,
            phase: Phase::NotStarted,
            current_event: None,
            outcome: None,
            completed: false,
            ledger,
            notifier,
        }
    }

    /// Reset the run and immediately advance to day 1.
    pub fn start(&mut self) -> SimResult<DayBrief> {
        self.reset_run();
        match self.step_day()? {
            DayStep::Dawn(brief) => Ok(brief),
            DayStep::Finished(_) => Err(SimError::Internal(
                "run finished before the first day".to_string(),
            )),
        }
    }

    /// Advance to the next day, or finalize when the run is over.
    /// Rejects calls while an event is unresolved.
    pub fn advance_day(&mut self) -> SimResult<DayStep> {
        match self.phase {
            Phase::NotStarted => Err(SimError::RunNotStarted),
            Phase::AwaitingAction => Err(SimError::EventPending),
            Phase::Finished => Err(SimError::RunAlreadyFinished),
            Phase::AwaitingContinue => {
                self.outcome = None;
                self.step_day()
            }
        }
    }

    /// Clear the day's outcome and move on. Alias for the player's
    /// "Continue" intent.
    pub fn continue_run(&mut self) -> SimResult<DayStep> {
        self.advance_day()
    }

    /// Resolve the pending event with the player's decision.
    pub fn resolve_action(&mut self, action: Action) -> SimResult<Outcome> {
        match self.phase {
            Phase::NotStarted => return Err(SimError::RunNotStarted),
            Phase::Finished => return Err(SimError::RunAlreadyFinished),
            Phase::AwaitingContinue => return Err(SimError::ActionAlreadyResolved),
            Phase::AwaitingAction => {}
        }
        let event = self.current_event.ok_or(SimError::NoPendingEvent)?;

        let outcome = match action {
            Action::Invest { percent } => {
                if percent > 100 {
                    return Err(SimError::InvalidPercent(percent));
                }
                self.resolve_invest(&event, percent)
            }
            Action::Ignore => {
                let description =
                    resolution::resolve_ignore(&event, self.run.sentiment, self.run.balance);
                Outcome {
                    kind: OutcomeKind::Neutral,
                    description,
                    profit: None,
                }
            }
        };

        self.run.close_day(self.run.balance);
        if self.config.logging.enable_outcome_logging {
            info!(
                "📒 Day {} resolved ({:?}): balance ${:.2}",
                self.run.day, outcome.kind, self.run.balance
            );
        }

        self.current_event = None;
        self.outcome = Some(outcome.clone());
        self.phase = Phase::AwaitingContinue;
        Ok(outcome)
    }

    /// Discard the current run and return to the start screen.
    pub fn restart(&mut self) {
        self.reset_run();
        self.notifier.notify(
            "Game Reset!",
            "Ready for another cycle? Good luck!",
            NoticeKind::Info,
        );
    }

    // --- accessors ---

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn balance(&self) -> f64 {
        self.run.balance
    }

    pub fn history(&self) -> &[HistoryPoint] {
        &self.run.history
    }

    pub fn current_event(&self) -> Option<&GameEvent> {
        self.current_event.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // --- internals ---

    fn reset_run(&mut self) {
        self.run = Run::new(self.config.game.initial_balance, self.config.game.max_days);
        self.phase = Phase::NotStarted;
        self.current_event = None;
        self.outcome = None;
        self.completed = false;
    }

    fn step_day(&mut self) -> SimResult<DayStep> {
        if self.run.is_over() {
            return Ok(DayStep::Finished(self.finalize()));
        }

        let day = self.run.day + 1;
        self.run.day = day;

        let roll: f64 = self.rng.gen();
        let mut new_sentiment = sentiment::drift(self.run.sentiment, roll);

        let event = self.draw_event()?;
        if let Some(effect) = event.sentiment_effect {
            new_sentiment = effect;
        }

        if new_sentiment != self.run.sentiment && self.config.logging.enable_sentiment_logging {
            debug!(
                "🔄 Sentiment shifted: {} → {}",
                self.run.sentiment, new_sentiment
            );
        }
        self.run.sentiment = new_sentiment;
        self.run.open_day(day);

        if self.config.logging.enable_event_logging {
            info!(
                "📅 Day {}/{} [{}]: {}",
                day, self.run.max_days, new_sentiment, event.title
            );
        }

        self.current_event = Some(event);
        self.outcome = None;
        self.phase = Phase::AwaitingAction;

        Ok(DayStep::Dawn(DayBrief {
            day,
            sentiment: new_sentiment,
            event,
        }))
    }

    fn draw_event(&mut self) -> SimResult<GameEvent> {
        if self.catalog.is_empty() {
            return Err(SimError::EmptyCatalog);
        }

        let mut pool: Vec<&GameEvent> = self
            .catalog
            .events()
            .iter()
            .filter(|e| !self.run.used_event_ids.contains(&e.id))
            .collect();
        if pool.is_empty() {
            warn!("All unique events shown; resetting the pool and allowing repeats");
            self.run.used_event_ids.clear();
            pool = self.catalog.events().iter().collect();
        }

        let candidate = if self.run.consecutive_negative_events
            >= self.config.game.negative_streak_threshold
        {
            // Streak breaker: after back-to-back unwinnable events, prefer
            // any calmer candidate still in the pool.
            let calm: Vec<&GameEvent> = pool
                .iter()
                .copied()
                .filter(|e| !e.is_highly_negative())
                .collect();
            if calm.is_empty() {
                *pool[self.rng.gen_range(0..pool.len())]
            } else {
                *calm[self.rng.gen_range(0..calm.len())]
            }
        } else {
            *pool[self.rng.gen_range(0..pool.len())]
        };

        if candidate.is_highly_negative() {
            self.run.consecutive_negative_events += 1;
        } else {
            self.run.consecutive_negative_events = 0;
        }
        self.run.used_event_ids.insert(candidate.id);

        Ok(candidate)
    }

    fn resolve_invest(&mut self, event: &GameEvent, percent: u8) -> Outcome {
        let amount = self.run.balance * (percent as f64 / 100.0);

        if amount <= 0.0 {
            return Outcome {
                kind: OutcomeKind::Neutral,
                description: "You observed the event but chose not to invest any DAI.".to_string(),
                profit: None,
            };
        }
        if self.run.balance < amount {
            return Outcome {
                kind: OutcomeKind::Neutral,
                description: format!("Insufficient funds to invest ${:.2} DAI.", amount),
                profit: None,
            };
        }

        let (resolution, description) =
            resolution::resolve_invest(event, self.run.sentiment, amount);
        self.run.balance = (self.run.balance + resolution.profit).max(0.0);
        self.run.ponzi_score += resolution.ponzi_penalty;

        Outcome {
            kind: resolution.kind,
            description,
            profit: Some(resolution.profit),
        }
    }

    fn finalize(&mut self) -> RunSummary {
        self.phase = Phase::Finished;
        self.current_event = None;

        let final_balance = self
            .run
            .history
            .last()
            .map(|point| point.value)
            .unwrap_or(self.run.balance);
        let message = format!(
            "Survived {} days! Final Value: ${:.2} DAI. Ponzi Score: {}.",
            self.run.day, final_balance, self.run.ponzi_score
        );

        let xp = scoring::xp_for_run(
            final_balance,
            self.run.initial_balance,
            self.run.ponzi_score,
            self.config.game.xp_reward,
        );

        if xp > 0 && !self.completed {
            self.ledger.add_xp(xp);
            self.completed = true;
            let kind = if xp > 10 {
                NoticeKind::Success
            } else {
                NoticeKind::Info
            };
            self.notifier.notify(
                "Cycle Complete!",
                &format!("{} You earned {} XP!", message, xp),
                kind,
            );
        } else if !self.completed {
            self.notifier.notify(
                "Cycle Complete!",
                &format!("{} No XP earned.", message),
                NoticeKind::Info,
            );
        }

        RunSummary {
            days_survived: self.run.day,
            final_balance,
            ponzi_score: self.run.ponzi_score,
            performance_factor: final_balance / self.run.initial_balance,
            xp_awarded: xp,
            message,
        }
    }
}
