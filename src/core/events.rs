use crate::config::Locale;
use crate::core::clients::ClientRoster;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventDraft};
use crate::store::{EVENTS_KEY, Storage, Store};
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_time;
use chrono::NaiveDate;

/// Scheduled events, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventBook {
    events: Vec<Event>,
}

impl EventBook {
    pub fn load<S: Storage>(store: &Store<S>) -> AppResult<Self> {
        Ok(Self {
            events: store.load_or_default(EVENTS_KEY)?,
        })
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Validate a form draft against the roster, append and persist it.
    /// Returns the index of the new event.
    pub fn add<S: Storage>(
        &mut self,
        store: &mut Store<S>,
        roster: &ClientRoster,
        draft: &EventDraft,
    ) -> AppResult<usize> {
        let event = validate(roster, draft)?;
        self.events.push(event);
        store.save(EVENTS_KEY, &self.events)?;
        Ok(self.events.len() - 1)
    }

    pub fn delete<S: Storage>(&mut self, store: &mut Store<S>, index: usize) -> AppResult<Event> {
        if index >= self.events.len() {
            return Err(AppError::InvalidIndex(index));
        }
        let removed = self.events.remove(index);
        store.save(EVENTS_KEY, &self.events)?;
        Ok(removed)
    }

    /// Events with their store index, optionally limited to inclusive bounds.
    pub fn list(&self, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<(usize, &Event)> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, e)| match bounds {
                Some((from, to)) => e.date >= from && e.date <= to,
                None => true,
            })
            .collect()
    }

    pub fn render_list(&self, bounds: Option<(NaiveDate, NaiveDate)>, locale: Locale) -> String {
        let rows = self.list(bounds);
        if rows.is_empty() {
            return match locale {
                Locale::Es => "No se encontraron eventos.\n",
                Locale::En => "No events found.\n",
            }
            .to_string();
        }

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("Date", 10),
            Column::new("Time", 5),
            Column::new("Type", 16),
            Column::new("Client", 18),
            Column::new("Address", 22),
            Column::new("Technician", 14),
        ]);
        for (i, e) in rows {
            table.add_row(vec![
                i.to_string(),
                e.date_str(),
                e.time_str(),
                e.kind.clone(),
                e.client.clone(),
                e.address.clone(),
                e.technician.clone(),
            ]);
        }
        table.render()
    }
}

/// Check required fields, parse date/time and resolve the client name.
pub fn validate(roster: &ClientRoster, draft: &EventDraft) -> AppResult<Event> {
    let required: [(&'static str, &str); 6] = [
        ("date", draft.date.as_str()),
        ("type", draft.kind.as_str()),
        ("time", draft.time.as_str()),
        ("client", draft.client.as_str()),
        ("address", draft.address.as_str()),
        ("technician", draft.technician.as_str()),
    ];
    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }

    let date = parse_date(&draft.date).ok_or_else(|| AppError::InvalidDate(draft.date.clone()))?;
    let time = parse_time(&draft.time).ok_or_else(|| AppError::InvalidTime(draft.time.clone()))?;

    let client = roster
        .find(&draft.client)
        .ok_or_else(|| AppError::UnknownClient(draft.client.trim().to_string()))?;

    Ok(Event {
        date,
        time,
        kind: draft.kind.trim().to_string(),
        client: client.name.clone(),
        address: draft.address.trim().to_string(),
        technician: draft.technician.trim().to_string(),
        description: draft.description.trim().to_string(),
    })
}
