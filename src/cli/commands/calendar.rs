use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{MonthCursor, MonthGrid, RenderStyle};
use crate::core::events::EventBook;
use crate::errors::AppResult;
use crate::store::Store;
use crate::utils::date;
use std::io::IsTerminal;

/// Render the month grid for the requested month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        next,
        prev,
        no_color,
    } = cmd
    {
        let start = match month {
            Some(m) => {
                let (y, mo) = date::parse_month(m)?;
                MonthCursor::new(y, mo)?
            }
            None => MonthCursor::current(),
        };
        let cursor = start.shift(i32::from(*next) - i32::from(*prev));

        let store = Store::open(cfg.data_path());
        let book = EventBook::load(&store)?;

        let grid = MonthGrid::build(cursor, book.events(), date::today(), cfg.week_start);
        let style = RenderStyle {
            locale: cfg.locale,
            cell_width: cfg.cell_width,
            highlight_today: cfg.highlight_today,
            color: !*no_color && std::io::stdout().is_terminal(),
        };

        print!("{}", grid.render(&style));
    }

    Ok(())
}
