use crate::cli::parser::{ClientAction, Commands};
use crate::config::Config;
use crate::core::clients::ClientRoster;
use crate::core::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Client { action } = cmd else {
        return Ok(());
    };

    let mut store = Store::open(cfg.data_path());
    let mut roster = ClientRoster::load(&store)?;

    match action {
        ClientAction::Add { name, contact } => {
            let idx = roster.add(&mut store, name, contact.as_deref().unwrap_or(""))?;
            let added = &roster.clients()[idx];

            success(format!("Client '{}' added (#{}).", added.name, idx));
            ttlog_quiet(&mut store, "add_client", &added.name, "Client registered");

            print!("{}", roster.render_list(cfg.locale));
        }

        ClientAction::List { options } => {
            if *options {
                print!("{}", roster.render_options(cfg.locale));
            } else {
                print!("{}", roster.render_list(cfg.locale));
            }
        }

        ClientAction::Del { index, yes } => {
            let name = roster
                .clients()
                .get(*index)
                .map(|c| c.name.clone())
                .ok_or(AppError::InvalidIndex(*index))?;

            let prompt = format!(
                "Delete client \"{}\"? Events already scheduled for this client will NOT be deleted.",
                name
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = roster.delete(&mut store, *index)?;
            success(format!("Client '{}' has been deleted.", removed.name));
            ttlog_quiet(&mut store, "del_client", &removed.name, "Client removed");

            print!("{}", roster.render_list(cfg.locale));
        }
    }

    Ok(())
}
