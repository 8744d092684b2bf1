//! Client roster: the named contacts events are scheduled for.

use crate::config::Locale;
use crate::errors::{AppError, AppResult};
use crate::models::Client;
use crate::store::{CLIENTS_KEY, Storage, Store};

/// Shown instead of the list when the roster is empty.
pub fn empty_roster_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "No hay clientes registrados aún.",
        Locale::En => "No clients registered yet.",
    }
}

/// Label of the empty-valued first option.
pub fn option_placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Selecciona un cliente",
        Locale::En => "Select a client",
    }
}

/// One entry of the event-client option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct ClientRoster {
    clients: Vec<Client>,
}

impl ClientRoster {
    pub fn load<S: Storage>(store: &Store<S>) -> AppResult<Self> {
        Ok(Self {
            clients: store.load_or_default(CLIENTS_KEY)?,
        })
    }

    pub fn from_clients(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.matches(name))
    }

    /// Validate, append and persist a new client. Returns its index.
    pub fn add<S: Storage>(
        &mut self,
        store: &mut Store<S>,
        name: &str,
        contact: &str,
    ) -> AppResult<usize> {
        let name = name.trim();
        let contact = contact.trim();

        if name.is_empty() {
            return Err(AppError::EmptyClientName);
        }
        if let Some(existing) = self.find(name) {
            return Err(AppError::DuplicateClient(existing.name.clone()));
        }

        self.clients.push(Client::new(name, contact));
        store.save(CLIENTS_KEY, &self.clients)?;
        Ok(self.clients.len() - 1)
    }

    /// Remove exactly the client at `index` and persist. Events are not touched.
    pub fn delete<S: Storage>(&mut self, store: &mut Store<S>, index: usize) -> AppResult<Client> {
        if index >= self.clients.len() {
            return Err(AppError::InvalidIndex(index));
        }
        let removed = self.clients.remove(index);
        store.save(CLIENTS_KEY, &self.clients)?;
        Ok(removed)
    }

    /// Roster list: `#i name (contact)` per client, or the empty message.
    pub fn render_list(&self, locale: Locale) -> String {
        if self.clients.is_empty() {
            return format!("{}\n", empty_roster_message(locale));
        }

        let idx_w = (self.clients.len() - 1).to_string().len();
        self.clients
            .iter()
            .enumerate()
            .map(|(i, c)| format!("#{:<idx_w$} {} ({})\n", i, c.name, c.contact))
            .collect()
    }

    /// Placeholder first, then one option per client in roster order.
    pub fn option_set(&self, locale: Locale) -> Vec<ClientOption> {
        std::iter::once(ClientOption {
            value: String::new(),
            label: option_placeholder(locale).to_string(),
        })
        .chain(self.clients.iter().map(|c| ClientOption {
            value: c.name.clone(),
            label: c.name.clone(),
        }))
        .collect()
    }

    pub fn render_options(&self, locale: Locale) -> String {
        self.option_set(locale)
            .iter()
            .map(|o| {
                if o.value.is_empty() {
                    format!("-- {} --\n", o.label)
                } else {
                    format!("   {}\n", o.label)
                }
            })
            .collect()
    }
}
