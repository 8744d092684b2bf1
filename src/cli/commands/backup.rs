use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let mut store = Store::open(cfg.data_path());

        if let Some(path) = BackupLogic::backup(&store, file, *compress)? {
            ttlog_quiet(
                &mut store,
                "backup",
                &path.to_string_lossy(),
                if *compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }
    }

    Ok(())
}
