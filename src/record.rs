//! Student record types.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Score record of a single student.
///
/// Each student has a name, a section label and a non-empty sequence of
/// assignment scores. The average over the scores is computed once at
/// construction, rounded to three decimal places, and the record is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    name: String,
    section: String,
    scores: Vec<f64>,
    average: f64,
}

impl StudentRecord {
    /// Create a new record from a name, a section label and raw scores.
    ///
    /// # Errors
    /// Returns an error if `scores` is empty.
    pub fn new(name: String, section: String, scores: Vec<f64>) -> Result<Self> {
        if scores.is_empty() {
            bail!("student {name:?} must have at least one score");
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let average = (mean * 1000.0).round() / 1000.0;

        Ok(Self {
            name,
            section,
            scores,
            average,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn average(&self) -> f64 {
        self.average
    }
}
