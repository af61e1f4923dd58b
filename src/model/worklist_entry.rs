use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_SCHEDULED: &str = "Scheduled";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorklistEntry {
    pub name: String,
    pub id: String,
    pub modality: String,
    pub study: String,
    pub accession: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    InProgress,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Pending,
}

impl WorklistEntry {
    pub fn new(
        name: &str,
        id: &str,
        modality: &str,
        study: &str,
        accession: &str,
        status: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            modality: modality.to_string(),
            study: study.to_string(),
            accession: accession.to_string(),
            status: status.to_string(),
        }
    }

    /// Builds an entry from an arbitrary JSON value without rejecting it.
    ///
    /// Missing or `null` fields become empty strings, other non-string
    /// scalars keep their JSON text, and a non-object value yields an entry
    /// with every field empty.
    pub fn from_json_lenient(value: &Value) -> Self {
        if let Ok(entry) = serde_json::from_value::<WorklistEntry>(value.clone()) {
            return entry;
        }

        let field = |key: &str| field_text(value.get(key));
        Self {
            name: field("name"),
            id: field("id"),
            modality: field("modality"),
            study: field("study"),
            accession: field("accession"),
            status: field("status"),
        }
    }

    pub fn badge_tone(&self) -> BadgeTone {
        match self.status.as_str() {
            STATUS_COMPLETED => BadgeTone::Success,
            STATUS_IN_PROGRESS => BadgeTone::InProgress,
            _ => BadgeTone::Neutral,
        }
    }

    // Only "Completed" gets its own icon; "In Progress" shares the pending one.
    pub fn status_icon(&self) -> StatusIcon {
        if self.status == STATUS_COMPLETED {
            StatusIcon::Check
        } else {
            StatusIcon::Pending
        }
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn sample_rows() -> Vec<WorklistEntry> {
    vec![
        WorklistEntry::new(
            "Budi Santoso",
            "PID-001245",
            "CT",
            "Head CT w/ Contrast",
            "ACC-2025-0001",
            STATUS_SCHEDULED,
        ),
        WorklistEntry::new(
            "Siti Aminah",
            "PID-001246",
            "MR",
            "Brain MRI",
            "ACC-2025-0002",
            STATUS_IN_PROGRESS,
        ),
        WorklistEntry::new(
            "Andi Wijaya",
            "PID-001247",
            "CR",
            "Chest X-Ray",
            "ACC-2025-0003",
            STATUS_COMPLETED,
        ),
    ]
}
