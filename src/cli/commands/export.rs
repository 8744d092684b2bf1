use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::events::EventBook;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut store = Store::open(cfg.data_path());
        let book = EventBook::load(&store)?;

        let count = ExportLogic::export(&book, *format, file, range.as_deref(), *force)?;
        if count > 0 {
            ttlog_quiet(
                &mut store,
                "export",
                file,
                &format!("Exported {} event(s) as {}", count, format.as_str()),
            );
        }
    }

    Ok(())
}
