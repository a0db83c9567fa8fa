use serde::{Deserialize, Serialize};

/// How events are cohorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPolicy {
    /// Distributed events first, then a non-distributed cohort with no
    /// handler.
    Split,
    /// A single cohort; every event is assigned a handler.
    Unified,
}

/// How work-roster rows are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkRosterPolicy {
    /// One roster row per working soul, enumerating the full range in order.
    Enumerate,
    /// A sampled number of rows, soul and work drawn independently.
    Sample,
}

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Sampler seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub events: EventPolicy,
    pub work_roster: WorkRosterPolicy,
    /// Also generate the soul cohort left without a handler.
    pub nondistributed_souls: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            events: EventPolicy::Split,
            work_roster: WorkRosterPolicy::Enumerate,
            nondistributed_souls: true,
        }
    }
}

/// Rows committed by one pipeline step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub step: String,
    pub rows: u64,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Seed the run actually used; feeding it back reproduces the output.
    pub seed: u64,
    pub steps: Vec<StepReport>,
    pub statements: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            steps: Vec::new(),
            statements: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_step(&mut self, step: &str, rows: u64) {
        self.steps.push(StepReport {
            step: step.to_string(),
            rows,
        });
    }

    /// Rows committed by the named step, zero if it did not run.
    pub fn rows(&self, step: &str) -> u64 {
        self.steps
            .iter()
            .find(|entry| entry.step == step)
            .map(|entry| entry.rows)
            .unwrap_or(0)
    }
}
