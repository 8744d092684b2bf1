use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::store::{LOG_KEY, Storage, Store};
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

/// Append an entry to the internal activity log.
pub fn ttlog<S: Storage>(
    store: &mut Store<S>,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    let mut entries: Vec<LogEntry> = store.load_or_default(LOG_KEY)?;
    let id = entries.last().map(|e| e.id + 1).unwrap_or(1);

    entries.push(LogEntry {
        id,
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    });

    store.save(LOG_KEY, &entries)
}

/// Same as [`ttlog`], but a failure only prints a warning.
pub fn ttlog_quiet<S: Storage>(store: &mut Store<S>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for each operation family
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add_event" | "add_client" => Colour::Green,
        "del_event" | "del_client" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the activity log, one aligned line per entry.
    pub fn render<S: Storage>(store: &Store<S>) -> AppResult<String> {
        let entries: Vec<LogEntry> = store.load_or_default(LOG_KEY)?;
        if entries.is_empty() {
            return Ok("No log entries.\n".to_string());
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut out = String::new();
        for e in &entries {
            let color = color_for_operation(&e.operation);

            let visible = op_target(e);
            let visible = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(out)
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
