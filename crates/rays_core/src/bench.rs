//! Benchmark bookkeeping: wall-clock duration of each render pass.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while saving a benchmark result.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durations of every render pass, in seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchResult {
    samples: Vec<f64>,
}

#[derive(Serialize)]
struct Report<'a> {
    average: f64,
    samples: &'a [f64],
}

impl BenchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pass.
    pub fn push(&mut self, seconds: f64) {
        self.samples.push(seconds);
    }

    pub fn sum(&self) -> f64 {
        self.samples.iter().sum()
    }

    /// Mean pass duration, 0 when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.sum() / self.samples.len() as f64
    }

    /// Encode as `{"average": .., "samples": [..]}`.
    pub fn to_json(&self) -> Result<String, BenchError> {
        let report = Report {
            average: self.average(),
            samples: &self.samples,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Write the JSON report to `path`, newline terminated.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BenchError> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}
