use serde::{Deserialize, Serialize};

use crate::model::participant::Participant;

/// An entry of the results log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    /// 1-based draw number within the session.
    pub sequence: usize,
    pub participant: Participant,
}
