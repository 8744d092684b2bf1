// src/export/model.rs

use crate::models::Event;
use serde::Serialize;

/// Flat export row; `index` is the event's position in the store.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub index: usize,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub client: String,
    pub address: String,
    pub technician: String,
    pub description: String,
}

impl EventExport {
    pub fn from_event(index: usize, e: &Event) -> Self {
        Self {
            index,
            date: e.date_str(),
            time: e.time_str(),
            kind: e.kind.clone(),
            client: e.client.clone(),
            address: e.address.clone(),
            technician: e.technician.clone(),
            description: e.description.clone(),
        }
    }
}
