// Run reports: serializable record of one finished play-through

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::engine::RunSummary;
use crate::core::run::Run;
use crate::error::{SimError, SimResult};
use crate::types::HistoryPoint;

const APP_URL: &str = "https://abc-de-fi.vercel.app/";

/// Everything worth keeping about a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub policy: String,
    pub seed: Option<u64>,
    pub days_survived: u32,
    pub initial_balance: f64,
    pub final_balance: f64,
    pub performance_factor: f64,
    pub ponzi_score: u32,
    pub xp_awarded: u32,
    pub history: Vec<HistoryPoint>,
}

impl RunReport {
    pub fn new(
        run: &Run,
        summary: &RunSummary,
        policy: impl Into<String>,
        seed: Option<u64>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at,
            finished_at: Utc::now(),
            policy: policy.into(),
            seed,
            days_survived: summary.days_survived,
            initial_balance: run.initial_balance,
            final_balance: summary.final_balance,
            performance_factor: summary.performance_factor,
            ponzi_score: summary.ponzi_score,
            xp_awarded: summary.xp_awarded,
            history: run.history.clone(),
        }
    }

    /// Run ended above break-even.
    pub fn is_profitable(&self) -> bool {
        self.final_balance > self.initial_balance
    }

    /// Run ended at or below 10% of the starting balance.
    pub fn is_ruined(&self) -> bool {
        self.final_balance <= 0.1 * self.initial_balance
    }

    /// Run ended above 10x the starting balance. Earns the flourish on the
    /// results screen.
    pub fn is_moonshot(&self) -> bool {
        self.final_balance > 10.0 * self.initial_balance
    }

    /// The copy-to-clipboard brag line.
    pub fn share_line(&self, username: &str) -> String {
        format!(
            "{} survived {} days in the DeFi Degen Cycle! Final Score: ${:.2} DAI. Ponzi Score: {}. Can you beat me? #DeFiDegenGame #ABCDeFi Try it: {}",
            username, self.days_survived, self.final_balance, self.ponzi_score, APP_URL
        )
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> SimResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| SimError::FileWrite(e.to_string()))?;
        Ok(())
    }
}

/// Write a whole batch as one JSON document.
pub fn save_batch<P: AsRef<std::path::Path>>(reports: &[RunReport], path: P) -> SimResult<()> {
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json).map_err(|e| SimError::FileWrite(e.to_string()))?;
    Ok(())
}
