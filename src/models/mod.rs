pub mod client;
pub mod event;
pub mod log_entry;

pub use client::Client;
pub use event::{Event, EventDraft};
pub use log_entry::LogEntry;
