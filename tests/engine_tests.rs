// Integration tests for the cycle engine state machine

mod common;

use common::{
    calm_event, create_test_config, engine_with, recording_ledger, recording_notifier, scam_event,
    seeded_engine, short_run_config,
};
use degen_cycle_sim::{
    Action, CycleEngine, DayStep, EventCatalog, OutcomeKind, Phase, Sentiment, SimError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_balance_never_goes_negative() {
    // All-in every day across several seeds: the clamp must hold after
    // every resolution
    for seed in 0..10 {
        let mut engine = seeded_engine(seed);
        engine.start().unwrap();
        loop {
            engine
                .resolve_action(Action::Invest { percent: 100 })
                .unwrap();
            assert!(
                engine.balance() >= 0.0,
                "balance went negative on seed {}",
                seed
            );
            match engine.continue_run().unwrap() {
                DayStep::Dawn(_) => {}
                DayStep::Finished(_) => break,
            }
        }
    }
}

#[test]
fn test_history_length_tracks_day() {
    let mut engine = seeded_engine(5);
    engine.start().unwrap();
    loop {
        assert_eq!(
            engine.history().len() as u32,
            engine.run().day + 1,
            "history out of step on day {}",
            engine.run().day
        );
        engine.resolve_action(Action::Ignore).unwrap();
        assert_eq!(engine.history().len() as u32, engine.run().day + 1);
        match engine.continue_run().unwrap() {
            DayStep::Dawn(_) => {}
            DayStep::Finished(_) => break,
        }
    }
    assert_eq!(engine.history().len(), 31);
    assert_eq!(engine.history()[0].day, 0);
    assert_eq!(engine.history()[0].value, 1000.0);
}

#[test]
fn test_terminal_determinism() {
    let mut engine = seeded_engine(9);
    engine.start().unwrap();

    // Exactly max_days resolve/continue pairs finish the run
    let mut continues = 0;
    loop {
        engine.resolve_action(Action::Ignore).unwrap();
        continues += 1;
        match engine.continue_run().unwrap() {
            DayStep::Dawn(_) => {}
            DayStep::Finished(summary) => {
                assert_eq!(summary.days_survived, 30);
                break;
            }
        }
    }
    assert_eq!(continues, 30);
    assert_eq!(engine.phase(), Phase::Finished);

    // Further advances are rejected and mutate nothing
    let balance = engine.balance();
    assert!(matches!(
        engine.advance_day(),
        Err(SimError::RunAlreadyFinished)
    ));
    assert!(matches!(
        engine.resolve_action(Action::Ignore),
        Err(SimError::RunAlreadyFinished)
    ));
    assert_eq!(engine.balance(), balance);
}

#[test]
fn test_streak_breaker_never_allows_three_traps() {
    // Two rugs and one calm entry: after two consecutive highly negative
    // draws the pool always still holds the calm event, so a third trap
    // must never appear
    for seed in 0..50 {
        let catalog =
            EventCatalog::from_events(vec![scam_event(1), scam_event(2), calm_event(3)]).unwrap();
        let mut engine = engine_with(create_test_config(), catalog, seed);

        let mut streak = 0;
        let mut brief = engine.start().unwrap();
        loop {
            if brief.event.is_highly_negative() {
                streak += 1;
            } else {
                streak = 0;
            }
            assert!(
                streak <= 2,
                "three consecutive highly negative draws on seed {}",
                seed
            );

            engine.resolve_action(Action::Ignore).unwrap();
            match engine.continue_run().unwrap() {
                DayStep::Dawn(next) => brief = next,
                DayStep::Finished(_) => break,
            }
        }
    }
}

#[test]
fn test_catalog_exhaustion_resets_pool() {
    // Three unique events, thirty days: the run must keep drawing after
    // the catalog runs dry
    let catalog =
        EventCatalog::from_events(vec![calm_event(1), calm_event(2), calm_event(3)]).unwrap();
    let mut engine = engine_with(create_test_config(), catalog, 4);

    let mut draws = 0;
    engine.start().unwrap();
    loop {
        draws += 1;
        engine.resolve_action(Action::Ignore).unwrap();
        match engine.continue_run().unwrap() {
            DayStep::Dawn(_) => {}
            DayStep::Finished(_) => break,
        }
    }
    assert_eq!(draws, 30);
}

#[test]
fn test_guaranteed_loss_contract() {
    let catalog = EventCatalog::from_events(vec![scam_event(1)]).unwrap();
    let mut engine = engine_with(short_run_config(3), catalog, 1);

    engine.start().unwrap();
    let outcome = engine
        .resolve_action(Action::Invest { percent: 50 })
        .unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Negative);
    assert_eq!(outcome.profit, Some(-500.0));
    assert_eq!(engine.balance(), 500.0);
    assert_eq!(engine.run().ponzi_score, 15);
}

#[test]
fn test_full_loss_scenario() {
    // 1000 DAI, all-in on a rug: wiped to zero
    let catalog = EventCatalog::from_events(vec![scam_event(1)]).unwrap();
    let mut engine = engine_with(short_run_config(3), catalog, 1);

    engine.start().unwrap();
    let outcome = engine
        .resolve_action(Action::Invest { percent: 100 })
        .unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Negative);
    assert_eq!(outcome.profit, Some(-1000.0));
    assert_eq!(engine.balance(), 0.0);
    assert_eq!(engine.history().last().unwrap().value, 0.0);
}

#[test]
fn test_ignoring_a_rug_keeps_the_balance() {
    let catalog = EventCatalog::from_events(vec![scam_event(1)]).unwrap();
    let mut engine = engine_with(short_run_config(3), catalog, 1);

    engine.start().unwrap();
    let outcome = engine.resolve_action(Action::Ignore).unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Neutral);
    assert_eq!(outcome.profit, None);
    assert_eq!(engine.balance(), 1000.0);
    assert!(outcome.description.contains("avoided a potential loss"));
    assert_eq!(engine.run().ponzi_score, 0);
}

#[test]
fn test_guaranteed_profit_scenario() {
    // Invest 200 of 1000 at a sure 1.5x: +100
    let mut event = calm_event(1);
    event.payout = degen_cycle_sim::Payout::GuaranteedProfit { multiplier: 1.5 };
    let catalog = EventCatalog::from_events(vec![event]).unwrap();
    let mut engine = engine_with(short_run_config(3), catalog, 1);

    engine.start().unwrap();
    let outcome = engine
        .resolve_action(Action::Invest { percent: 20 })
        .unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Positive);
    assert_eq!(outcome.profit, Some(100.0));
    assert_eq!(engine.balance(), 1100.0);
}

#[test]
fn test_event_sentiment_effect_overrides_roll() {
    let mut event = scam_event(1);
    event.sentiment_effect = Some(Sentiment::Panic);
    let catalog = EventCatalog::from_events(vec![event]).unwrap();
    let mut engine = engine_with(create_test_config(), catalog, 2);

    let brief = engine.start().unwrap();
    assert_eq!(brief.sentiment, Sentiment::Panic);
    assert_eq!(engine.run().sentiment, Sentiment::Panic);
}

#[test]
fn test_xp_paid_once_through_the_ledger() {
    // Sure 2x every day: the run finishes far above break-even and the
    // full reward lands in the ledger exactly once
    let mut event = calm_event(1);
    event.payout = degen_cycle_sim::Payout::GuaranteedProfit { multiplier: 2.0 };
    let catalog = EventCatalog::from_events(vec![event]).unwrap();

    let (ledger, grants) = recording_ledger();
    let (notifier, notices) = recording_notifier();
    let mut engine = CycleEngine::with_rng(
        short_run_config(2),
        catalog,
        StdRng::seed_from_u64(1),
        Box::new(ledger),
        Box::new(notifier),
    );

    engine.start().unwrap();
    loop {
        engine
            .resolve_action(Action::Invest { percent: 100 })
            .unwrap();
        match engine.continue_run().unwrap() {
            DayStep::Dawn(_) => {}
            DayStep::Finished(summary) => {
                // 1000 -> 2000 -> 4000; clean run pays the full reward
                assert_eq!(summary.final_balance, 4000.0);
                assert_eq!(summary.xp_awarded, 150);
                break;
            }
        }
    }

    assert_eq!(*grants.borrow(), vec![150]);
    assert!(engine.is_completed());

    let notices = notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, "Cycle Complete!");
    assert!(notices[0].1.contains("You earned 150 XP!"));
}

#[test]
fn test_break_even_run_pays_consolation_xp() {
    let (ledger, grants) = recording_ledger();
    let (notifier, notices) = recording_notifier();
    let mut engine = CycleEngine::with_rng(
        create_test_config(),
        EventCatalog::builtin(),
        StdRng::seed_from_u64(8),
        Box::new(ledger),
        Box::new(notifier),
    );

    engine.start().unwrap();
    loop {
        engine.resolve_action(Action::Ignore).unwrap();
        match engine.continue_run().unwrap() {
            DayStep::Dawn(_) => {}
            DayStep::Finished(summary) => {
                assert_eq!(summary.final_balance, 1000.0);
                assert_eq!(summary.xp_awarded, 10);
                break;
            }
        }
    }

    assert_eq!(*grants.borrow(), vec![10]);
    assert!(notices.borrow()[0].1.contains("Survived 30 days!"));
}

#[test]
fn test_rejections_leave_state_untouched() {
    let mut engine = seeded_engine(3);

    // Before start
    assert!(matches!(
        engine.resolve_action(Action::Ignore),
        Err(SimError::RunNotStarted)
    ));
    assert_eq!(engine.phase(), Phase::NotStarted);

    engine.start().unwrap();
    let day = engine.run().day;
    let balance = engine.balance();

    // Advancing past an unresolved event
    assert!(matches!(engine.advance_day(), Err(SimError::EventPending)));

    // Out-of-range stake
    assert!(matches!(
        engine.resolve_action(Action::Invest { percent: 200 }),
        Err(SimError::InvalidPercent(200))
    ));

    assert_eq!(engine.run().day, day);
    assert_eq!(engine.balance(), balance);
    assert_eq!(engine.phase(), Phase::AwaitingAction);

    // Double resolution
    engine.resolve_action(Action::Ignore).unwrap();
    assert!(matches!(
        engine.resolve_action(Action::Ignore),
        Err(SimError::ActionAlreadyResolved)
    ));
    assert_eq!(engine.phase(), Phase::AwaitingContinue);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let drive = |seed: u64| {
        let mut engine = seeded_engine(seed);
        let mut titles = Vec::new();
        let mut brief = engine.start().unwrap();
        loop {
            titles.push(brief.event.title);
            engine
                .resolve_action(Action::Invest { percent: 25 })
                .unwrap();
            match engine.continue_run().unwrap() {
                DayStep::Dawn(next) => brief = next,
                DayStep::Finished(summary) => return (titles, summary.final_balance),
            }
        }
    };

    let (titles_a, balance_a) = drive(42);
    let (titles_b, balance_b) = drive(42);
    assert_eq!(titles_a, titles_b);
    assert_eq!(balance_a, balance_b);

    let (titles_c, _) = drive(43);
    assert_ne!(titles_a, titles_c);
}

#[test]
fn test_restart_allows_a_fresh_run() {
    let mut engine = seeded_engine(6);
    engine.start().unwrap();
    engine
        .resolve_action(Action::Invest { percent: 100 })
        .unwrap();

    engine.restart();
    assert_eq!(engine.phase(), Phase::NotStarted);
    assert_eq!(engine.balance(), 1000.0);

    let brief = engine.start().unwrap();
    assert_eq!(brief.day, 1);
    assert_eq!(engine.history().len(), 2);
}
