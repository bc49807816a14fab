// End-of-run XP computation

/// XP earned for a finished run, always within [0, xp_reward].
///
/// Profitable runs scale with how far above break-even the player landed,
/// damped by the ponzi score (floored at 10% so one bad call doesn't zero
/// a winning cycle). Getting wiped out pays a 5 XP consolation; merely
/// losing pays 10.
pub fn xp_for_run(
    final_balance: f64,
    initial_balance: f64,
    ponzi_score: u32,
    xp_reward: u32,
) -> u32 {
    let performance = final_balance / initial_balance;

    let xp = if performance > 1.0 {
        let gain_share = (performance - 1.0).min(1.0);
        let integrity = (1.0 - ponzi_score as f64 / 100.0).max(0.1);
        (xp_reward as f64 * gain_share * integrity).floor() as i64
    } else if final_balance <= 0.1 * initial_balance {
        5
    } else {
        10
    };

    xp.clamp(0, xp_reward as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling_clean_run_pays_full_reward() {
        assert_eq!(xp_for_run(2000.0, 1000.0, 0, 150), 150);
        // Anything beyond 2x is capped
        assert_eq!(xp_for_run(5000.0, 1000.0, 0, 150), 150);
    }

    #[test]
    fn test_partial_gain_scales_linearly() {
        // +50% with no penalties: half the reward
        assert_eq!(xp_for_run(1500.0, 1000.0, 0, 150), 75);
    }

    #[test]
    fn test_ponzi_score_damps_reward() {
        assert_eq!(xp_for_run(2000.0, 1000.0, 30, 150), 105);
        // Damping floors at 10%
        assert_eq!(xp_for_run(2000.0, 1000.0, 100, 150), 15);
        assert_eq!(xp_for_run(2000.0, 1000.0, 250, 150), 15);
    }

    #[test]
    fn test_losing_runs_pay_flat_consolation() {
        assert_eq!(xp_for_run(900.0, 1000.0, 0, 150), 10);
        assert_eq!(xp_for_run(1000.0, 1000.0, 0, 150), 10);
        // Wiped out (at or below 10% of start)
        assert_eq!(xp_for_run(100.0, 1000.0, 0, 150), 5);
        assert_eq!(xp_for_run(0.0, 1000.0, 50, 150), 5);
    }

    #[test]
    fn test_tiny_gain_can_floor_to_zero() {
        assert_eq!(xp_for_run(1001.0, 1000.0, 0, 150), 0);
    }

    #[test]
    fn test_monotone_in_performance_for_fixed_ponzi() {
        let mut last = 0;
        for final_balance in [1100.0, 1300.0, 1500.0, 1800.0, 2000.0, 3000.0] {
            let xp = xp_for_run(final_balance, 1000.0, 20, 150);
            assert!(xp >= last, "xp dropped at balance {}", final_balance);
            last = xp;
        }
    }

    #[test]
    fn test_monotone_in_ponzi_for_fixed_performance() {
        let mut last = u32::MAX;
        for ponzi in [0, 10, 25, 50, 75, 100] {
            let xp = xp_for_run(1800.0, 1000.0, ponzi, 150);
            assert!(xp <= last, "xp rose at ponzi {}", ponzi);
            last = xp;
        }
    }

    #[test]
    fn test_never_exceeds_reward() {
        for ponzi in [0, 15, 60] {
            for final_balance in [0.0, 50.0, 999.0, 1500.0, 9999.0] {
                let xp = xp_for_run(final_balance, 1000.0, ponzi, 150);
                assert!(xp <= 150);
            }
        }
    }
}
