// Aggregate statistics over batches of simulated runs

use std::collections::HashMap;

use crate::report::RunReport;

/// Summary of a batch of runs under one policy.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub runs: usize,
    pub mean_final_balance: f64,
    pub median_final_balance: f64,
    pub best_final_balance: f64,
    pub worst_final_balance: f64,
    /// Share of runs ending above break-even, in percent.
    pub win_rate_pct: f64,
    /// Share of runs ending at or below 10% of the start, in percent.
    pub ruin_rate_pct: f64,
    pub moonshots: usize,
    pub mean_xp: f64,
    pub total_xp: u64,
    pub mean_ponzi_score: f64,
    /// Runs per policy name, for mixed batches.
    pub runs_per_policy: HashMap<String, usize>,
}

pub struct BatchAnalyzer;

impl BatchAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a batch. Empty input yields an all-zero summary.
    pub fn summarize(&self, reports: &[RunReport]) -> BatchSummary {
        if reports.is_empty() {
            return self.empty_summary();
        }

        let n = reports.len() as f64;

        let mut finals: Vec<f64> = reports.iter().map(|r| r.final_balance).collect();
        finals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean_final_balance = finals.iter().sum::<f64>() / n;
        let median_final_balance = if finals.len() % 2 == 0 {
            (finals[finals.len() / 2 - 1] + finals[finals.len() / 2]) / 2.0
        } else {
            finals[finals.len() / 2]
        };

        let wins = reports.iter().filter(|r| r.is_profitable()).count();
        let ruins = reports.iter().filter(|r| r.is_ruined()).count();
        let moonshots = reports.iter().filter(|r| r.is_moonshot()).count();

        let total_xp: u64 = reports.iter().map(|r| r.xp_awarded as u64).sum();
        let mean_ponzi_score = reports.iter().map(|r| r.ponzi_score as f64).sum::<f64>() / n;

        let mut runs_per_policy: HashMap<String, usize> = HashMap::new();
        for report in reports {
            *runs_per_policy.entry(report.policy.clone()).or_insert(0) += 1;
        }

        BatchSummary {
            runs: reports.len(),
            mean_final_balance,
            median_final_balance,
            best_final_balance: *finals.last().unwrap(),
            worst_final_balance: finals[0],
            win_rate_pct: wins as f64 / n * 100.0,
            ruin_rate_pct: ruins as f64 / n * 100.0,
            moonshots,
            mean_xp: total_xp as f64 / n,
            total_xp,
            mean_ponzi_score,
            runs_per_policy,
        }
    }

    fn empty_summary(&self) -> BatchSummary {
        BatchSummary {
            runs: 0,
            mean_final_balance: 0.0,
            median_final_balance: 0.0,
            best_final_balance: 0.0,
            worst_final_balance: 0.0,
            win_rate_pct: 0.0,
            ruin_rate_pct: 0.0,
            moonshots: 0,
            mean_xp: 0.0,
            total_xp: 0,
            mean_ponzi_score: 0.0,
            runs_per_policy: HashMap::new(),
        }
    }
}

impl Default for BatchAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::RunSummary;
    use crate::core::run::Run;
    use chrono::Utc;

    fn report(final_balance: f64, xp: u32) -> RunReport {
        let mut run = Run::new(1000.0, 30);
        run.day = 30;
        run.balance = final_balance;
        let summary = RunSummary {
            days_survived: 30,
            final_balance,
            ponzi_score: 10,
            performance_factor: final_balance / 1000.0,
            xp_awarded: xp,
            message: String::new(),
        };
        RunReport::new(&run, &summary, "steady", None, Utc::now())
    }

    #[test]
    fn test_empty_batch() {
        let summary = BatchAnalyzer::new().summarize(&[]);
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.total_xp, 0);
    }

    #[test]
    fn test_batch_statistics() {
        let reports = vec![
            report(2000.0, 150),
            report(500.0, 10),
            report(50.0, 5),
            report(1500.0, 75),
        ];
        let summary = BatchAnalyzer::new().summarize(&reports);

        assert_eq!(summary.runs, 4);
        assert!((summary.mean_final_balance - 1012.5).abs() < 1e-9);
        assert!((summary.median_final_balance - 1000.0).abs() < 1e-9);
        assert_eq!(summary.best_final_balance, 2000.0);
        assert_eq!(summary.worst_final_balance, 50.0);
        assert!((summary.win_rate_pct - 50.0).abs() < 1e-9);
        assert!((summary.ruin_rate_pct - 25.0).abs() < 1e-9);
        assert_eq!(summary.total_xp, 240);
        assert_eq!(summary.runs_per_policy["steady"], 4);
    }

    #[test]
    fn test_moonshot_count() {
        let reports = vec![report(15000.0, 150), report(900.0, 10)];
        let summary = BatchAnalyzer::new().summarize(&reports);
        assert_eq!(summary.moonshots, 1);
    }
}
