use crate::cli::parser::{Commands, EventAction};
use crate::config::Config;
use crate::core::calendar::{MonthCursor, MonthGrid, RenderStyle};
use crate::core::clients::ClientRoster;
use crate::core::events::EventBook;
use crate::core::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::EventDraft;
use crate::store::Store;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Event { action } = cmd else {
        return Ok(());
    };

    let mut store = Store::open(cfg.data_path());
    let mut book = EventBook::load(&store)?;

    match action {
        EventAction::Add {
            date: date_str,
            time,
            kind,
            client,
            address,
            technician,
            description,
        } => {
            let roster = ClientRoster::load(&store)?;

            let draft = EventDraft {
                date: date_str.clone(),
                time: time.clone().unwrap_or_default(),
                kind: kind
                    .clone()
                    .unwrap_or_else(|| cfg.default_event_type.clone()),
                client: client.clone().unwrap_or_default(),
                address: address.clone().unwrap_or_default(),
                technician: technician.clone().unwrap_or_default(),
                description: description.clone().unwrap_or_default(),
            };

            let idx = book.add(&mut store, &roster, &draft)?;
            let ev = &book.events()[idx];

            success(format!(
                "Event #{} added on {}: {}",
                idx,
                ev.date_str(),
                ev.cell_label()
            ));
            ttlog_quiet(&mut store, "add_event", &ev.date_str(), &ev.cell_label());

            // re-render the month the event landed in
            let grid = MonthGrid::build(
                MonthCursor::containing(ev.date),
                book.events(),
                date::today(),
                cfg.week_start,
            );
            let style = RenderStyle {
                locale: cfg.locale,
                cell_width: cfg.cell_width,
                highlight_today: cfg.highlight_today,
                color: false,
            };
            println!();
            print!("{}", grid.render(&style));
        }

        EventAction::List { period } => {
            let bounds = match period {
                Some(p) => date::parse_period(p)?,
                None => None,
            };
            print!("{}", book.render_list(bounds, cfg.locale));
        }

        EventAction::Del { index, yes } => {
            let label = book
                .events()
                .get(*index)
                .map(|e| format!("{} {}", e.date_str(), e.cell_label()))
                .ok_or(AppError::InvalidIndex(*index))?;

            if !*yes && !ask_confirmation(&format!("Delete event #{} ({})?", index, label)) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = book.delete(&mut store, *index)?;
            success(format!("Event #{} has been deleted.", index));
            ttlog_quiet(
                &mut store,
                "del_event",
                &removed.date_str(),
                &removed.cell_label(),
            );
        }
    }

    Ok(())
}
