use crate::utils::time::{format_time, hhmm};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled visit. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub time: NaiveTime, // "HH:MM"
    #[serde(rename = "type")]
    pub kind: String,
    pub client: String, // matches Client.name by string only
    pub address: String,
    pub technician: String,
    #[serde(default)]
    pub description: String,
}

impl Event {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        format_time(&self.time)
    }

    /// One-line label shown inside a day cell.
    pub fn cell_label(&self) -> String {
        format!("{} - {} ({})", self.time_str(), self.kind, self.client)
    }

    /// Full details, one field per line.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Type", self.kind.as_str()),
            ("Client", self.client.as_str()),
            ("Address", self.address.as_str()),
            ("Technician", self.technician.as_str()),
            ("Description", self.description.as_str()),
        ]
    }
}

/// Raw form input for a new event; every field may be blank.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub date: String,
    pub time: String,
    pub kind: String,
    pub client: String,
    pub address: String,
    pub technician: String,
    pub description: String,
}
