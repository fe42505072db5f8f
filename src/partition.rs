use crate::filter::filter_section;
use crate::roster::{read_roster, write_roster};
use anyhow::{Context, Result};
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

/// Strip the last `.`-delimited component of a path, or keep the whole path if
/// it has none.
pub fn base_name<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref().to_str().context("path is not valid UTF-8")?;

    let base = match path.rsplit_once('.') {
        Some((base, _)) => base,
        None => path,
    };
    Ok(base.to_string())
}

/// Output file holding the records of one section.
pub fn section_file<P: AsRef<Path>>(path: P, section: &str) -> Result<PathBuf> {
    let base = base_name(path)?;
    Ok(PathBuf::from(format!("{base}_section_{section}.csv")))
}

/// Partition a roster file into one output file per section.
///
/// Sections are written in lexicographic label order to
/// `<base>_section_<label>.csv` next to the input. A roster that cannot be
/// read, or that is empty, produces no output; failures are reported through
/// the log and never propagated.
pub fn split_section<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();

    let records = match read_roster(path) {
        Ok(Some(records)) => records,
        Ok(None) => return,
        Err(error) => {
            log::warn!("{error}");
            return;
        }
    };

    let sections: BTreeSet<_> = records.iter().map(|record| record.section()).collect();
    for section in sections {
        let file = match section_file(path, section) {
            Ok(file) => file,
            Err(error) => {
                log::warn!("{error:#}");
                return;
            }
        };

        let section_records = filter_section(&records, section);
        match write_roster(&file, &section_records) {
            Ok(()) => log::info!("wrote {file:?}"),
            Err(error) => log::warn!("{error}"),
        }
    }
}
