//! State of one draw session.
//!
//! `RaffleSession` is everything the page shows: the uploaded roster, the pool
//! still on the wheel, the last winner, the last upload error and the results
//! log. The browser component owns exactly one and mutates it in response to
//! uploads and wheel callbacks.

use rand::Rng;

use crate::config::RaffleConfig;
use crate::export::{ExportError, export_results};
use crate::import::{ImportError, Roster, parse_roster};
use crate::model::participant::Participant;
use crate::model::spin_result::SpinResult;
use crate::palette::random_colors;

/// What an accepted upload contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    /// Line numbers dropped by a lenient variant.
    pub skipped: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct RaffleSession {
    config: RaffleConfig,
    participants: Vec<Participant>,
    available: Vec<Participant>,
    selected: Option<Participant>,
    error: Option<String>,
    results: Vec<SpinResult>,
    segment_colors: Vec<String>,
    /// Bumped whenever the pool on the wheel changes, so the wheel remounts.
    wheel_key: u32,
}

impl RaffleSession {
    pub fn new(config: RaffleConfig) -> Self {
        Self {
            config,
            participants: Vec::new(),
            available: Vec::new(),
            selected: None,
            error: None,
            results: Vec::new(),
            segment_colors: Vec::new(),
            wheel_key: 0,
        }
    }

    /// Replaces the roster with the contents of an uploaded file.
    ///
    /// On failure only the error message changes; the previous roster, pool,
    /// winner and results stay as they were. The results log also survives a
    /// successful upload.
    pub fn load_csv<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> Result<LoadSummary, ImportError> {
        let variant = self.config.variant;
        let Roster {
            participants,
            skipped,
        } = parse_roster(text, variant.schema(), variant.import_policy()).inspect_err(|err| {
            self.error = Some(err.to_string());
        })?;

        let loaded = participants.len();
        self.available = participants.clone();
        self.participants = participants;
        self.error = None;
        self.refresh_wheel(rng);

        Ok(LoadSummary { loaded, skipped })
    }

    /// Surfaces a failure to read the file itself the same way as a bad upload.
    pub fn record_read_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Reacts to the wheel reporting `employee_id` as the winning segment.
    ///
    /// Unknown identifiers are ignored. When the variant removes winners, every
    /// pool entry carrying that identifier leaves the wheel, since the wheel
    /// cannot tell equal labels apart.
    pub fn declare_winner<R: Rng + ?Sized>(
        &mut self,
        employee_id: &str,
        rng: &mut R,
    ) -> Option<&Participant> {
        let winner = self
            .available
            .iter()
            .find(|p| p.employee_id == employee_id)?
            .clone();

        let variant = self.config.variant;
        if variant.records_results() {
            self.results.push(SpinResult {
                sequence: self.results.len() + 1,
                participant: winner.clone(),
            });
        }
        if variant.removes_winner() {
            self.available.retain(|p| p.employee_id != employee_id);
            self.refresh_wheel(rng);
        }

        self.selected = Some(winner);
        self.selected.as_ref()
    }

    /// CSV text of the results log, or `None` when nothing has been drawn.
    pub fn export_csv(&self) -> Result<Option<String>, ExportError> {
        export_results(&self.results)
    }

    fn refresh_wheel<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.segment_colors = random_colors(self.available.len(), rng);
        self.wheel_key = self.wheel_key.wrapping_add(1);
    }

    pub fn config(&self) -> &RaffleConfig {
        &self.config
    }

    /// Everyone from the last accepted upload.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Entries still on the wheel.
    pub fn available(&self) -> &[Participant] {
        &self.available
    }

    /// Wheel labels, one per entry still on the wheel.
    pub fn segments(&self) -> Vec<String> {
        self.available.iter().map(|p| p.employee_id.clone()).collect()
    }

    pub fn segment_colors(&self) -> &[String] {
        &self.segment_colors
    }

    pub fn selected(&self) -> Option<&Participant> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[SpinResult] {
        &self.results
    }

    pub fn wheel_key(&self) -> u32 {
        self.wheel_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ROSTER: &str = "ts,name,id\nt1,Somchai,E001\nt2,Malee,E002\nt3,Anan,E003\n";

    fn session(variant: Variant) -> (RaffleSession, StdRng) {
        (
            RaffleSession::new(RaffleConfig::for_variant(variant)),
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn upload_fills_pool_and_wheel() {
        let (mut session, mut rng) = session(Variant::Elimination);
        let summary = session.load_csv(ROSTER, &mut rng).unwrap();

        assert_eq!(summary.loaded, 3);
        assert_eq!(session.participants().len(), 3);
        assert_eq!(session.segments(), ["E001", "E002", "E003"]);
        assert_eq!(session.segment_colors().len(), 3);
        assert_eq!(session.wheel_key(), 1);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn rejected_upload_keeps_previous_state() {
        let (mut session, mut rng) = session(Variant::Elimination);
        session.load_csv(ROSTER, &mut rng).unwrap();
        session.declare_winner("E002", &mut rng);
        let key = session.wheel_key();

        let err = session.load_csv("ts,name,id\nt9,,E009\n", &mut rng).unwrap_err();

        assert_eq!(session.error(), Some(err.to_string().as_str()));
        assert_eq!(session.participants().len(), 3);
        assert_eq!(session.segments(), ["E001", "E003"]);
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.selected().map(|p| p.employee_id.as_str()), Some("E002"));
        assert_eq!(session.wheel_key(), key);
    }

    #[test]
    fn successful_upload_clears_error() {
        let (mut session, mut rng) = session(Variant::Classic);
        assert!(session.load_csv("ts,name,id\n", &mut rng).is_err());
        assert_eq!(session.error(), Some("No valid employees found in CSV"));

        session.load_csv(ROSTER, &mut rng).unwrap();
        assert_eq!(session.error(), None);
    }

    #[test]
    fn elimination_removes_and_logs_winner() {
        let (mut session, mut rng) = session(Variant::Elimination);
        session.load_csv(ROSTER, &mut rng).unwrap();

        let winner = session.declare_winner("E002", &mut rng).cloned().unwrap();
        assert_eq!(winner.first_name, "Malee");
        assert_eq!(session.segments(), ["E001", "E003"]);
        assert_eq!(session.segment_colors().len(), 2);
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.results()[0].sequence, 1);
        assert_eq!(session.wheel_key(), 2);
    }

    #[test]
    fn classic_keeps_winner_and_logs_nothing() {
        let (mut session, mut rng) = session(Variant::Classic);
        session.load_csv(ROSTER, &mut rng).unwrap();

        session.declare_winner("E001", &mut rng).unwrap();
        assert_eq!(session.available().len(), 3);
        assert!(session.results().is_empty());
        assert_eq!(session.wheel_key(), 1);
        assert_eq!(session.export_csv().unwrap(), None);
        assert_eq!(session.selected().map(|p| p.employee_id.as_str()), Some("E001"));
    }

    #[test]
    fn unknown_winner_changes_nothing() {
        let (mut session, mut rng) = session(Variant::Elimination);
        session.load_csv(ROSTER, &mut rng).unwrap();

        assert!(session.declare_winner("E999", &mut rng).is_none());
        assert_eq!(session.available().len(), 3);
        assert!(session.results().is_empty());
        assert!(session.selected().is_none());
    }

    #[test]
    fn duplicate_identifiers_leave_together() {
        let (mut session, mut rng) = session(Variant::Elimination);
        session
            .load_csv("ts,name,id\nt1,A,E001\nt2,B,E001\nt3,C,E002\n", &mut rng)
            .unwrap();

        let winner = session.declare_winner("E001", &mut rng).cloned().unwrap();
        assert_eq!(winner.first_name, "A");
        assert_eq!(session.segments(), ["E002"]);
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn department_variant_reports_skipped_rows() {
        let (mut session, mut rng) = session(Variant::Department);
        let summary = session
            .load_csv("ts,name,id,dept\nt1,A,E001,IT\nt2,B,E002,\n", &mut rng)
            .unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: vec![3] });
        assert_eq!(session.available()[0].department.as_deref(), Some("IT"));
    }

    #[test]
    fn read_error_is_shown_like_an_upload_error() {
        let (mut session, _) = session(Variant::Elimination);
        session.record_read_error("file could not be read");
        assert_eq!(session.error(), Some("file could not be read"));
    }
}
