pub mod backup;
pub mod calendar;
pub mod clients;
pub mod events;
pub mod log;
