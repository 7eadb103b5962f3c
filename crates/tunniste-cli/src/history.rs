//! Best-effort history recorder: one JSON object per line, appended to a
//! caller-chosen file. Failures are logged and swallowed.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use serde_json::{Map, Value, json};
use tracing::warn;

pub fn record(path: &Path, kind: &str, content: &str, meta: &Map<String, Value>) {
    if let Err(err) = try_record(path, kind, content, meta) {
        warn!("failed to record history to {}: {err}", path.display());
    }
}

fn try_record(path: &Path, kind: &str, content: &str, meta: &Map<String, Value>) -> io::Result<()> {
    let entry = json!({
        "type": kind,
        "content": content,
        "meta": meta,
        "recorded_at": Utc::now().to_rfc3339(),
    });
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{entry}")
}
