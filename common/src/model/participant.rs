use serde::{Deserialize, Serialize};

/// One raffle candidate, parsed positionally from a CSV row.
///
/// `employee_id` is the value written on the wheel segment and the value the
/// wheel reports back when a spin finishes. Nothing enforces uniqueness: two
/// rows with the same identifier produce two segments with the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// First CSV column. Form exports put a submission timestamp here; some
    /// hand-made files put the employee name instead, which is why the results
    /// table and export label it as the name column.
    pub timestamp: String,
    pub first_name: String,
    pub employee_id: String,
    /// Only read under the department schema.
    pub department: Option<String>,
    /// Optional fifth column of the department schema.
    pub learning_channel: Option<String>,
}

impl Participant {
    pub fn new(timestamp: &str, first_name: &str, employee_id: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            first_name: first_name.to_string(),
            employee_id: employee_id.to_string(),
            department: None,
            learning_channel: None,
        }
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    pub fn with_learning_channel(mut self, channel: &str) -> Self {
        self.learning_channel = Some(channel.to_string());
        self
    }
}
