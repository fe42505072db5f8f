use crate::record::StudentRecord;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a numeric sequence.
///
/// `std_dev` is the population standard deviation (divisor `n`) and
/// `range = max - min`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

/// Compute the summary statistics of a non-empty sequence.
pub fn get_stats(vals: &[f64]) -> Result<StatSummary> {
    if vals.is_empty() {
        bail!("cannot compute statistics of an empty sequence");
    }

    let mean = vals.iter().sum::<f64>() / vals.len() as f64;
    let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let var = vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / vals.len() as f64;

    Ok(StatSummary {
        mean,
        std_dev: var.sqrt(),
        min,
        max,
        range: max - min,
    })
}

/// Compute summary statistics over a whole roster: first for the student
/// averages, then for each assignment column in order.
///
/// The first record fixes the number of assignment columns; every record must
/// have at least that many scores, and any surplus scores are ignored.
pub fn get_assignment_stats(records: &[StudentRecord]) -> Result<Vec<StatSummary>> {
    let Some(first) = records.first() else {
        bail!("cannot compute statistics of an empty roster");
    };

    let n_assignments = first.scores().len();
    for record in records {
        let n_scores = record.scores().len();
        if n_scores < n_assignments {
            bail!(
                "student {:?} has {n_scores} scores, but the roster has {n_assignments} assignments",
                record.name()
            );
        }
    }

    let averages: Vec<_> = records.iter().map(|record| record.average()).collect();
    let mut summaries = vec![get_stats(&averages).context("failed to compute average statistics")?];

    for i_asg in 0..n_assignments {
        let column: Vec<_> = records.iter().map(|record| record.scores()[i_asg]).collect();
        summaries.push(
            get_stats(&column)
                .with_context(|| format!("failed to compute statistics of assignment {i_asg}"))?,
        );
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, section: &str, scores: &[f64]) -> StudentRecord {
        StudentRecord::new(name.to_string(), section.to_string(), scores.to_vec())
            .expect("failed to construct record")
    }

    #[test]
    fn single_value_stats_collapse() {
        let summary = get_stats(&[42.5]).expect("failed to compute stats");
        assert_eq!(summary.mean, 42.5);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.min, 42.5);
        assert_eq!(summary.max, 42.5);
        assert_eq!(summary.range, 0.0);
    }

    #[test]
    fn std_dev_uses_the_population_divisor() {
        let summary = get_stats(&[1.0, 2.0, 3.0, 4.0]).expect("failed to compute stats");
        assert_eq!(summary.mean, 2.5);
        assert!((summary.std_dev - 1.118033988749895).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.range, 3.0);
    }

    #[test]
    fn empty_sequence_is_an_error() {
        assert!(get_stats(&[]).is_err());
    }

    #[test]
    fn assignment_stats_cover_averages_and_every_column() {
        let records = vec![
            record("alice", "A", &[90.0, 80.0, 70.0]),
            record("bob", "B", &[60.0, 70.0, 80.0]),
        ];

        let summaries = get_assignment_stats(&records).expect("failed to compute stats");
        assert_eq!(summaries.len(), 4);

        assert_eq!(summaries[0].mean, 75.0);
        assert_eq!(summaries[0].range, 10.0);

        assert_eq!(summaries[1].mean, 75.0);
        assert_eq!(summaries[1].range, 30.0);
        assert_eq!(summaries[2].mean, 75.0);
        assert_eq!(summaries[3].mean, 75.0);
    }

    #[test]
    fn empty_roster_is_an_error() {
        assert!(get_assignment_stats(&[]).is_err());
    }

    #[test]
    fn short_score_sequences_are_an_error() {
        let records = vec![
            record("alice", "A", &[90.0, 80.0]),
            record("bob", "A", &[60.0]),
        ];
        assert!(get_assignment_stats(&records).is_err());
    }

    #[test]
    fn surplus_scores_are_ignored() {
        let records = vec![
            record("alice", "A", &[90.0]),
            record("bob", "A", &[60.0, 100.0]),
        ];

        let summaries = get_assignment_stats(&records).expect("failed to compute stats");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].mean, 75.0);
    }
}
