// Player-action resolution: signed profit and outcome text for one decision

use crate::catalog::{GameEvent, Payout};
use crate::types::{EventKind, OutcomeKind, Sentiment, IGNORE_REFERENCE_STAKE};

/// Numeric result of staking `amount` on an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub kind: OutcomeKind,
    /// Signed; positive is gain, negative is loss.
    pub profit: f64,
    pub ponzi_penalty: u32,
}

/// Ephemeral result of one player decision, cleared on continue.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub description: String,
    pub profit: Option<f64>,
}

fn adjusted_multiplier(base: f64, sentiment: Sentiment) -> f64 {
    (base * sentiment.payout_multiplier()).max(1.0)
}

/// Signed profit for staking `amount` on `event` under `sentiment`.
/// Pure; the engine applies the result to the run.
pub fn stake_profit(event: &GameEvent, sentiment: Sentiment, amount: f64) -> Resolution {
    match event.payout {
        Payout::GuaranteedLoss => Resolution {
            kind: OutcomeKind::Negative,
            profit: -amount,
            ponzi_penalty: 15,
        },
        Payout::FixedLoss {
            severity,
            ponzi_penalty,
        } => Resolution {
            kind: OutcomeKind::Negative,
            profit: -amount * severity,
            ponzi_penalty,
        },
        Payout::ColdMarketFlop {
            multiplier,
            severity,
            ponzi_penalty,
        } => {
            if sentiment.is_cold() {
                Resolution {
                    kind: OutcomeKind::Negative,
                    profit: -amount * severity,
                    ponzi_penalty,
                }
            } else {
                Resolution {
                    kind: OutcomeKind::Positive,
                    profit: amount * (adjusted_multiplier(multiplier, sentiment) - 1.0),
                    ponzi_penalty: 0,
                }
            }
        }
        // No sentiment adjustment on sure things
        Payout::GuaranteedProfit { multiplier } => Resolution {
            kind: OutcomeKind::Positive,
            profit: amount * (multiplier - 1.0),
            ponzi_penalty: 0,
        },
        Payout::Speculative { multiplier } => Resolution {
            kind: OutcomeKind::Positive,
            profit: amount * (adjusted_multiplier(multiplier, sentiment) - 1.0),
            ponzi_penalty: 0,
        },
        Payout::Contrarian { multiplier } => {
            // The dip payout never drops below the event's own multiplier
            let adjusted = (multiplier * sentiment.payout_multiplier())
                .max(multiplier)
                .max(1.0);
            Resolution {
                kind: OutcomeKind::Positive,
                profit: amount * (adjusted - 1.0),
                ponzi_penalty: 0,
            }
        }
    }
}

fn hint_suffix(event: &GameEvent) -> String {
    event
        .clue
        .map(|clue| format!(" Hint: {}", clue))
        .unwrap_or_default()
}

fn setback_reason(event: &GameEvent) -> String {
    if event.payout.is_guaranteed_loss() {
        match event.kind {
            EventKind::ScamOpportunity => {
                format!("It was a trap! The '{}' rugged.", event.title)
            }
            EventKind::NftOpportunity => {
                format!("The NFT hype died or it rugged ('{}').", event.title)
            }
            _ if event.delayed_effect => {
                format!("Chasing the pump ('{}') too late backfired.", event.title)
            }
            _ => format!("The setup for '{}' was unfavorable.", event.title),
        }
    } else if let Some(note) = event.setback_note {
        note.to_string()
    } else {
        "Investment failed.".to_string()
    }
}

/// Resolve an "Invest" with a positive, solvent stake.
pub fn resolve_invest(event: &GameEvent, sentiment: Sentiment, amount: f64) -> (Resolution, String) {
    let resolution = stake_profit(event, sentiment, amount);

    let description = match resolution.kind {
        OutcomeKind::Negative => format!(
            "{} Lost {:.2} DAI.{}",
            setback_reason(event),
            resolution.profit.abs(),
            hint_suffix(event)
        ),
        _ => {
            let profit_pct = if resolution.profit > 0.0 && amount > 0.0 {
                resolution.profit / amount * 100.0
            } else {
                0.0
            };
            let dip_note = if matches!(event.payout, Payout::Contrarian { .. }) {
                " Buying during extreme fear paid off! Remember: Bull markets are often born in depression."
            } else {
                ""
            };
            format!(
                "Good call on '{}'! Your investment of ${:.2} DAI yielded a profit of ${:.2} DAI (+{:.1}%)!{}{}",
                event.title,
                amount,
                resolution.profit,
                profit_pct,
                dip_note,
                hint_suffix(event)
            )
        }
    };

    (resolution, description)
}

/// Describe what ignoring the event would have meant, judged against a
/// fixed reference stake of 25% of the balance. The reference is
/// deliberately independent of the player's chosen percent: it reports
/// typical risk, not the player's.
pub fn resolve_ignore(event: &GameEvent, sentiment: Sentiment, balance: f64) -> String {
    let reference = balance * IGNORE_REFERENCE_STAKE;
    let hypothetical = stake_profit(event, sentiment, reference);

    let would_lose = match event.payout {
        Payout::GuaranteedLoss | Payout::FixedLoss { .. } => true,
        Payout::ColdMarketFlop { .. } => sentiment.is_cold(),
        _ => false,
    };

    if would_lose {
        let blurb = if matches!(event.kind, EventKind::ScamOpportunity)
            || event.payout.is_guaranteed_loss()
        {
            "a rug/scam or bad setup"
        } else {
            "a losing trade"
        };
        format!(
            "You ignored '{}'. Good call! It turned out to be {}. You avoided a potential loss of ~${:.2} DAI.{}",
            event.title,
            blurb,
            hypothetical.profit.abs(),
            hint_suffix(event)
        )
    } else {
        format!(
            "You ignored '{}'. Turns out it pumped! You missed out on a potential profit of ~${:.2} DAI.",
            event.title, hypothetical.profit
        )
    }
}
