//! Utilities to read, filter, partition and summarize student score records
//! stored in delimited text files.

pub mod config;
pub mod filter;
pub mod gradebook;
pub mod partition;
pub mod record;
pub mod roster;
pub mod stats;
