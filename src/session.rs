// Headless session driver: runs a full cycle under a policy

use chrono::Utc;
use rand::Rng;

use crate::core::engine::{CycleEngine, DayStep, RunSummary};
use crate::error::{SimError, SimResult};
use crate::policy::ActionPolicy;
use crate::report::RunReport;

/// Play one complete run start-to-finish, letting the policy answer every
/// event. Returns the report for the finished run.
pub fn autoplay<R: Rng>(
    engine: &mut CycleEngine<R>,
    policy: &mut dyn ActionPolicy,
    seed: Option<u64>,
) -> SimResult<RunReport> {
    let started_at = Utc::now();

    let mut brief = engine.start()?;
    let summary: RunSummary = loop {
        let action = policy.decide(&brief.event, engine.run());
        engine.resolve_action(action)?;

        match engine.continue_run()? {
            DayStep::Dawn(next) => brief = next,
            DayStep::Finished(summary) => break summary,
        }
    };

    Ok(RunReport::new(
        engine.run(),
        &summary,
        policy.name(),
        seed,
        started_at,
    ))
}

/// Play one run, calling `on_day` after each resolved day. Used by the CLI
/// to narrate interactive-speed playback.
pub fn autoplay_with<R: Rng, F>(
    engine: &mut CycleEngine<R>,
    policy: &mut dyn ActionPolicy,
    seed: Option<u64>,
    mut on_day: F,
) -> SimResult<RunReport>
where
    F: FnMut(u32, &crate::core::resolution::Outcome, f64),
{
    let started_at = Utc::now();

    let mut brief = engine.start()?;
    let summary: RunSummary = loop {
        let action = policy.decide(&brief.event, engine.run());
        let outcome = engine.resolve_action(action)?;
        on_day(brief.day, &outcome, engine.balance());

        match engine.continue_run()? {
            DayStep::Dawn(next) => brief = next,
            DayStep::Finished(summary) => break summary,
        }
    };

    if engine.run().day != engine.run().max_days {
        return Err(SimError::Internal(format!(
            "run ended on day {} of {}",
            engine.run().day,
            engine.run().max_days
        )));
    }

    Ok(RunReport::new(
        engine.run(),
        &summary,
        policy.name(),
        seed,
        started_at,
    ))
}
