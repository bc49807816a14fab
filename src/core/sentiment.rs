// Daily sentiment drift

use crate::types::Sentiment;

/// Map a uniform roll in [0, 1) to the day's sentiment.
///
/// The mood is resampled from the full distribution every day; this is not
/// a random walk. Each branch is skipped when the candidate equals the
/// current mood, letting the roll fall through to the next band. Two
/// consequences worth knowing: a roll under 0.05 while already panicked
/// lands on bearish, and a bullish market rolling 0.70..0.90 jumps
/// straight to euphoric. Gameplay is tuned around both.
pub fn drift(current: Sentiment, roll: f64) -> Sentiment {
    if roll < 0.05 && current != Sentiment::Panic {
        Sentiment::Panic
    } else if roll < 0.20 && current != Sentiment::Bearish {
        Sentiment::Bearish
    } else if roll < 0.70 {
        Sentiment::Neutral
    } else if roll < 0.90 && current != Sentiment::Bullish {
        Sentiment::Bullish
    } else if current != Sentiment::Euphoric {
        Sentiment::Euphoric
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_mapping_from_neutral() {
        assert_eq!(drift(Sentiment::Neutral, 0.01), Sentiment::Panic);
        assert_eq!(drift(Sentiment::Neutral, 0.10), Sentiment::Bearish);
        assert_eq!(drift(Sentiment::Neutral, 0.50), Sentiment::Neutral);
        assert_eq!(drift(Sentiment::Neutral, 0.80), Sentiment::Bullish);
        assert_eq!(drift(Sentiment::Neutral, 0.95), Sentiment::Euphoric);
    }

    #[test]
    fn test_tie_falls_through_to_next_band() {
        // Already panicked: a panic roll lands on the next band down
        assert_eq!(drift(Sentiment::Panic, 0.01), Sentiment::Bearish);
        // Already bearish: a bearish roll falls to neutral
        assert_eq!(drift(Sentiment::Bearish, 0.10), Sentiment::Neutral);
        // Already bullish: a bullish roll escalates to euphoric
        assert_eq!(drift(Sentiment::Bullish, 0.80), Sentiment::Euphoric);
        // Already euphoric: a euphoric roll keeps the mood
        assert_eq!(drift(Sentiment::Euphoric, 0.95), Sentiment::Euphoric);
    }

    #[test]
    fn test_neutral_band_has_no_guard() {
        // The neutral band applies unconditionally
        assert_eq!(drift(Sentiment::Neutral, 0.40), Sentiment::Neutral);
        assert_eq!(drift(Sentiment::Panic, 0.40), Sentiment::Neutral);
    }

    #[test]
    fn test_boundary_rolls() {
        assert_eq!(drift(Sentiment::Neutral, 0.05), Sentiment::Bearish);
        assert_eq!(drift(Sentiment::Neutral, 0.20), Sentiment::Neutral);
        assert_eq!(drift(Sentiment::Neutral, 0.70), Sentiment::Bullish);
        assert_eq!(drift(Sentiment::Neutral, 0.90), Sentiment::Euphoric);
    }
}
