use crate::record::StudentRecord;

/// Keep the records whose section label equals `section` exactly.
pub fn filter_section(records: &[StudentRecord], section: &str) -> Vec<StudentRecord> {
    records
        .iter()
        .filter(|record| record.section() == section)
        .cloned()
        .collect()
}

/// Keep the records whose average lies in the half-open interval `[lo, hi)`.
pub fn filter_average(records: &[StudentRecord], lo: f64, hi: f64) -> Vec<StudentRecord> {
    records
        .iter()
        .filter(|record| lo <= record.average() && record.average() < hi)
        .cloned()
        .collect()
}
