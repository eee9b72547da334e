//! CSV ingestion.
//!
//! Columns are positional. The first row is always treated as a header and
//! discarded, whatever it contains. Fields are trimmed and an empty field is
//! the same as a missing one. Quotes carry no meaning: a `"` is ordinary
//! field text and never joins lines or hides a comma.

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::model::participant::Participant;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid CSV format (line {line})")]
    InvalidRow { line: u64 },
    #[error("No valid employees found in CSV")]
    Empty,
    #[error("Unreadable CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Column layout of the uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// timestamp, first name, identifier
    Basic,
    /// timestamp, first name, identifier, department, learning channel (optional)
    Department,
}

/// What to do with a row that lacks a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPolicy {
    /// Reject the whole upload.
    Strict,
    /// Drop the row and keep going.
    SkipInvalid,
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    /// Line numbers of rows dropped under `ImportPolicy::SkipInvalid`.
    pub skipped: Vec<u64>,
}

pub fn parse_roster(text: &str, schema: Schema, policy: ImportPolicy) -> Result<Roster, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut participants = Vec::new();
    let mut skipped = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        match participant_from_record(&record, schema) {
            Some(participant) => participants.push(participant),
            None if policy == ImportPolicy::SkipInvalid => skipped.push(line),
            None => return Err(ImportError::InvalidRow { line }),
        }
    }

    if participants.is_empty() {
        return Err(ImportError::Empty);
    }

    Ok(Roster {
        participants,
        skipped,
    })
}

fn participant_from_record(record: &StringRecord, schema: Schema) -> Option<Participant> {
    let field = |idx: usize| record.get(idx).filter(|value| !value.is_empty());

    let mut participant = Participant::new(field(0)?, field(1)?, field(2)?);

    if schema == Schema::Department {
        participant = participant.with_department(field(3)?);
        if let Some(channel) = field(4) {
            participant = participant.with_learning_channel(channel);
        }
    }

    Some(participant)
}
