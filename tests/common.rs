#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcalendar::core::clients::ClientRoster;
use rcalendar::models::{Client, Event};
use rcalendar::store::{CLIENTS_KEY, EVENTS_KEY, MemoryStorage, Store};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated sandbox for one test: a fake HOME and a data directory inside it.
pub struct Sandbox {
    pub home: PathBuf,
    pub data: PathBuf,
}

impl Sandbox {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("rcalendar_test_{name}"));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create sandbox");

        let data = home.join("data");
        Self { home, data }
    }

    pub fn data_dir(&self) -> String {
        self.data.to_string_lossy().to_string()
    }

    /// Binary with HOME redirected and `--data-dir` already set.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.args(["--data-dir", &self.data_dir()]);
        cmd
    }

    /// Binary with HOME redirected and no `--data-dir`.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rcalendar");
        cmd.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .env_remove("EDITOR")
            .env_remove("VISUAL");
        cmd
    }

    /// Config directory the binary sees under the fake HOME.
    pub fn config_dir(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.home.join("rcalendar")
        } else {
            self.home.join(".rcalendar")
        }
    }

    pub fn out(&self, file: &str) -> String {
        self.home.join(file).to_string_lossy().to_string()
    }

    pub fn read_store(&self, key: &str) -> String {
        fs::read_to_string(self.data.join(format!("{key}.json"))).unwrap_or_default()
    }
}

pub fn event(date: &str, time: &str, client: &str) -> Event {
    serde_json::from_value(serde_json::json!({
        "date": date,
        "time": time,
        "type": "Visita Técnica",
        "client": client,
        "address": "Calle Mayor 1",
        "technician": "Luis",
        "description": ""
    }))
    .expect("valid event")
}

/// In-memory store pre-filled with a roster and some events.
pub fn seeded_store(clients: &[(&str, &str)], events: &[Event]) -> Store<MemoryStorage> {
    let mut store = Store::in_memory();
    let clients: Vec<Client> = clients.iter().map(|(n, c)| Client::new(*n, *c)).collect();
    store.save(CLIENTS_KEY, &clients).expect("save clients");
    store.save(EVENTS_KEY, events).expect("save events");
    store
}

pub fn roster(names: &[&str]) -> ClientRoster {
    ClientRoster::from_clients(names.iter().map(|n| Client::new(*n, "")).collect())
}
