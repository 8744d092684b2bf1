use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::{Client, Event, LogEntry};
use crate::store::{CLIENTS_KEY, EVENTS_KEY, LOG_KEY, Store};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the data directory and the three JSON stores
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;
    let data_dir = cfg.data_path();

    println!("⚙️  Initializing rCalendar…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data dir    : {}", data_dir.display());

    let mut store = Store::open(&data_dir);

    // existing stores are re-saved as they are, missing ones become []
    let events: Vec<Event> = store.load_or_default(EVENTS_KEY)?;
    let clients: Vec<Client> = store.load_or_default(CLIENTS_KEY)?;
    let log: Vec<LogEntry> = store.load_or_default(LOG_KEY)?;
    store.save(EVENTS_KEY, &events)?;
    store.save(CLIENTS_KEY, &clients)?;
    store.save(LOG_KEY, &log)?;

    ttlog_quiet(
        &mut store,
        "init",
        "",
        &format!("Data directory initialized at {}", data_dir.display()),
    );

    println!("🎉 rCalendar initialization completed!");
    Ok(())
}
