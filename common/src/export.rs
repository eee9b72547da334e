use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::model::spin_result::SpinResult;

/// Header row of the exported file: draw number, employee name, identifier.
pub const EXPORT_HEADERS: [&str; 3] = ["ครั้งที่", "ชื่อพนักงาน", "รหัส"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write results: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not flush results: {0}")]
    Flush(#[source] std::io::Error),
}

/// Renders the results log as CSV, one row per draw in draw order.
///
/// Returns `None` for an empty log so the caller can skip the download.
pub fn export_results(results: &[SpinResult]) -> Result<Option<String>, ExportError> {
    if results.is_empty() {
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for result in results {
        writer.write_record([
            result.sequence.to_string().as_str(),
            result.participant.timestamp.as_str(),
            result.participant.employee_id.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.into_error()))?;
    let text = String::from_utf8(bytes).map_err(|err| {
        ExportError::Flush(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::participant::Participant;

    fn result(sequence: usize, timestamp: &str, id: &str) -> SpinResult {
        SpinResult {
            sequence,
            participant: Participant::new(timestamp, "name", id),
        }
    }

    #[test]
    fn empty_log_exports_nothing() {
        assert!(export_results(&[]).unwrap().is_none());
    }

    #[test]
    fn rows_follow_draw_order() {
        let results = vec![result(1, "Malee", "E002"), result(2, "Anan", "E003")];
        let csv = export_results(&results).unwrap().unwrap();
        assert_eq!(csv, "ครั้งที่,ชื่อพนักงาน,รหัส\n1,Malee,E002\n2,Anan,E003\n");
        assert_eq!(csv.lines().count(), results.len() + 1);
    }

    #[test]
    fn fields_are_written_verbatim() {
        let csv = export_results(&[result(1, "Boy \"Nong\"", "E001")])
            .unwrap()
            .unwrap();
        assert!(csv.ends_with("\n1,Boy \"Nong\",E001\n"));
    }
}
