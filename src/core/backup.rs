use crate::errors::AppResult;
use crate::store::{ALL_KEYS, Storage, Store};
use crate::ui::messages::{ask_confirmation, info, success};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Every store key as one JSON object, keyed by storage key.
    pub fn snapshot<S: Storage>(store: &Store<S>) -> AppResult<Value> {
        let mut map = Map::new();
        for key in ALL_KEYS {
            map.insert(key.to_string(), store.load_raw(key)?);
        }
        Ok(Value::Object(map))
    }

    /// Write a snapshot to `dest_file`, or to `dest_file` with a `.zip`
    /// extension when compressing.
    ///
    /// Returns the final path, or `None` if the user declined to overwrite.
    pub fn backup<S: Storage>(
        store: &Store<S>,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_target.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        let json = serde_json::to_string_pretty(&Self::snapshot(store)?)?;

        if compress {
            // the snapshot goes straight into the archive, `dest` is never written
            write_zip(&final_target, &entry_name(dest), json.as_bytes())?;
            success(format!("Backup created: {}", final_target.display()));
            info(format!("Compressed: {}", final_target.display()));
        } else {
            fs::write(&final_target, json)?;
            success(format!("Backup created: {}", final_target.display()));
        }

        Ok(Some(final_target))
    }
}

/// Archive entry name: the backup file name with a `.json` extension.
fn entry_name(dest: &Path) -> String {
    dest.with_extension("json")
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rcalendar-backup.json".to_string())
}

fn write_zip(zip_path: &Path, entry: &str, data: &[u8]) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;
    zip.write_all(data)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
