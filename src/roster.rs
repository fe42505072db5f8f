//! Reading and writing of delimited roster files.
//!
//! A roster row holds the student name, the section label and a variable
//! number of scores, in that order, with no header row.

use crate::record::StudentRecord;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failure modes of reading and writing roster files.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("error occurred when opening {path:?} to read")]
    OpenRead { path: PathBuf, source: io::Error },

    #[error("error occurred when opening {path:?} to write")]
    OpenWrite { path: PathBuf, source: io::Error },

    #[error("row {row} of {path:?} is malformed: expected a name, a section and at least one score")]
    MalformedRow { path: PathBuf, row: usize },

    #[error("row {row} of {path:?} has an invalid score {value:?}")]
    InvalidScore {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("failed to read {path:?}")]
    Read { path: PathBuf, source: csv::Error },

    #[error("failed to write {path:?}")]
    Write { path: PathBuf, source: csv::Error },
}

/// Read all student records from a roster file.
///
/// Returns `Ok(None)` if the file exists but contains no rows. The average of
/// each record is recomputed from its scores, so a stored average column is
/// never needed or read.
pub fn read_roster<P: AsRef<Path>>(path: P) -> Result<Option<Vec<StudentRecord>>, RosterError> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(RosterError::OpenRead {
            path: path.to_path_buf(),
            source: ErrorKind::IsADirectory.into(),
        });
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            return Err(RosterError::OpenRead {
                path: path.to_path_buf(),
                source,
            });
        }
        Err(source) => {
            return Err(RosterError::Read {
                path: path.to_path_buf(),
                source: source.into(),
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for (i_row, row) in reader.records().enumerate() {
        let row = row.map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let row_num = i_row + 1;

        if row.len() < 3 {
            return Err(RosterError::MalformedRow {
                path: path.to_path_buf(),
                row: row_num,
            });
        }

        let name = row[0].to_string();
        let section = row[1].to_string();

        let mut scores = Vec::with_capacity(row.len() - 2);
        for field in row.iter().skip(2) {
            let score = field.trim().parse().map_err(|_| RosterError::InvalidScore {
                path: path.to_path_buf(),
                row: row_num,
                value: field.to_string(),
            })?;
            scores.push(score);
        }

        let record =
            StudentRecord::new(name, section, scores).map_err(|_| RosterError::MalformedRow {
                path: path.to_path_buf(),
                row: row_num,
            })?;
        records.push(record);
    }

    if records.is_empty() {
        return Ok(None);
    }
    Ok(Some(records))
}

/// Serialize records as delimited rows to any writer.
///
/// Each row holds the name, the section and the scores; the stored average is
/// not written.
pub fn write_records<W: Write>(writer: W, records: &[StudentRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    for record in records {
        let mut row = vec![record.name().to_string(), record.section().to_string()];
        row.extend(record.scores().iter().map(|score| score.to_string()));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write records to a roster file, one delimited row per record.
///
/// There is no atomicity: a failure part way through leaves whatever rows were
/// already written.
pub fn write_roster<P: AsRef<Path>>(path: P, records: &[StudentRecord]) -> Result<(), RosterError> {
    let path = path.as_ref();

    let file = match File::create(path) {
        Ok(file) => file,
        Err(source)
            if matches!(
                source.kind(),
                ErrorKind::PermissionDenied | ErrorKind::IsADirectory
            ) =>
        {
            return Err(RosterError::OpenWrite {
                path: path.to_path_buf(),
                source,
            });
        }
        Err(source) => {
            return Err(RosterError::Write {
                path: path.to_path_buf(),
                source: source.into(),
            });
        }
    };

    write_records(BufWriter::new(file), records).map_err(|source| RosterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_records() -> Vec<StudentRecord> {
        vec![
            StudentRecord::new("alice".to_string(), "A".to_string(), vec![90.0, 80.5, 70.0])
                .expect("failed to construct record"),
            StudentRecord::new("bob".to_string(), "B".to_string(), vec![60.0, 70.0])
                .expect("failed to construct record"),
        ]
    }

    #[test]
    fn round_trip_preserves_records() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("grades.csv");

        let records = sample_records();
        write_roster(&path, &records).expect("failed to write roster");

        let reread = read_roster(&path)
            .expect("failed to read roster")
            .expect("roster is empty");
        assert_eq!(records, reread);
    }

    #[test]
    fn average_column_is_not_written() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("grades.csv");

        write_roster(&path, &sample_records()).expect("failed to write roster");

        let contents = fs::read_to_string(&path).expect("failed to read file");
        assert_eq!(contents, "alice,A,90,80.5,70\nbob,B,60,70\n");
    }

    #[test]
    fn empty_file_reads_as_no_data() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("grades.csv");
        fs::write(&path, "").expect("failed to write file");

        assert!(read_roster(&path).expect("failed to read roster").is_none());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.csv");

        let error = read_roster(&path).expect_err("read should fail");
        assert!(matches!(error, RosterError::OpenRead { .. }));
        assert!(error.to_string().contains("to read"));
    }

    #[test]
    fn directory_is_an_open_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let error = read_roster(dir.path()).expect_err("read should fail");
        assert!(matches!(error, RosterError::OpenRead { .. }));
    }

    #[test]
    fn short_rows_are_malformed() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("grades.csv");
        fs::write(&path, "alice,A\n").expect("failed to write file");

        let error = read_roster(&path).expect_err("read should fail");
        assert!(matches!(error, RosterError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn unparseable_scores_are_invalid() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("grades.csv");
        fs::write(&path, "alice,A,90\nbob,B,sixty\n").expect("failed to write file");

        let error = read_roster(&path).expect_err("read should fail");
        assert!(matches!(error, RosterError::InvalidScore { row: 2, .. }));
        assert!(error.to_string().contains("sixty"));
    }

    #[test]
    fn writing_to_a_directory_is_an_open_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let error = write_roster(dir.path(), &sample_records()).expect_err("write should fail");
        assert!(matches!(error, RosterError::OpenWrite { .. }));
        assert!(error.to_string().contains("to write"));
    }
}
