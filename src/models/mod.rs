//! Typed views of dataset rows

pub mod patient;

pub use patient::{PatientRecord, extract_records};
