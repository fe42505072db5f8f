use crate::config::Config;
use crate::filter::{filter_average, filter_section};
use crate::partition::{self, split_section};
use crate::record::StudentRecord;
use crate::roster::{read_roster, write_records};
use crate::stats::get_assignment_stats;
use anyhow::{Context, Result, bail};
use glob::glob;
use std::{fs, io, path::PathBuf};

/// Command-level operations over one roster file.
pub struct Gradebook {
    roster: PathBuf,
    cfg: Config,
}

impl Gradebook {
    pub fn new(roster: PathBuf, cfg: Config) -> Self {
        Self { roster, cfg }
    }

    /// Print the statistics table of the roster: one row for the student
    /// averages and, if configured, one row per assignment.
    pub fn report_stats(&self) -> Result<()> {
        let Some(records) = self.load() else {
            return Ok(());
        };

        let summaries =
            get_assignment_stats(&records).context("failed to compute assignment statistics")?;

        let precision = self.cfg.precision;
        let width = precision + 8;

        println!(
            "{:<14} {:>width$} {:>width$} {:>width$} {:>width$} {:>width$}",
            "column", "mean", "std_dev", "min", "max", "range"
        );

        let mut rows = vec![("average".to_string(), &summaries[0])];
        if self.cfg.per_assignment {
            for (i_asg, summary) in summaries[1..].iter().enumerate() {
                rows.push((format!("assignment {}", i_asg + 1), summary));
            }
        }

        for (label, summary) in rows {
            println!(
                "{label:<14} {:>width$.precision$} {:>width$.precision$} {:>width$.precision$} {:>width$.precision$} {:>width$.precision$}",
                summary.mean, summary.std_dev, summary.min, summary.max, summary.range
            );
        }

        Ok(())
    }

    /// Print the records of one section as delimited rows on stdout.
    pub fn report_section(&self, section: &str) -> Result<()> {
        let Some(records) = self.load() else {
            return Ok(());
        };

        let selected = filter_section(&records, section);
        write_records(io::stdout().lock(), &selected)
            .context("failed to write records to stdout")?;
        Ok(())
    }

    /// Print the records whose average lies in `[lo, hi)` as delimited rows on
    /// stdout.
    pub fn report_average_band(&self, lo: f64, hi: f64) -> Result<()> {
        if hi < lo {
            bail!("band upper bound {hi} must not be below the lower bound {lo}");
        }

        let Some(records) = self.load() else {
            return Ok(());
        };

        let selected = filter_average(&records, lo, hi);
        write_records(io::stdout().lock(), &selected)
            .context("failed to write records to stdout")?;
        Ok(())
    }

    /// Partition the roster into per-section files.
    pub fn split(&self) {
        split_section(&self.roster);
    }

    /// Delete the section files generated by [`Gradebook::split`].
    pub fn clean(&self) -> Result<()> {
        let pattern = format!("{}_section_*.csv", partition::base_name(&self.roster)?);

        for entry in glob(&pattern).context("failed to glob section files")? {
            let file = entry.context("failed to resolve glob entry")?;
            fs::remove_file(&file).with_context(|| format!("failed to remove {file:?}"))?;
            log::info!("removed {file:?}");
        }

        Ok(())
    }

    fn load(&self) -> Option<Vec<StudentRecord>> {
        match read_roster(&self.roster) {
            Ok(Some(records)) => Some(records),
            Ok(None) => {
                log::warn!("{:?} contains no records", self.roster);
                None
            }
            Err(error) => {
                log::warn!("{error}");
                None
            }
        }
    }
}
