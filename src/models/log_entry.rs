use serde::{Deserialize, Serialize};

/// Row of the internal activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub date: String, // RFC 3339, local time
    pub operation: String,
    #[serde(default)]
    pub target: String,
    pub message: String,
}
