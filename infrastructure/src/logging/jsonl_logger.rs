//! JSONL file writer for round events.
//!
//! Each round event is serialized as a single JSON line with a `type` field
//! and `timestamp`, appended to the file via a buffered writer.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this file is a machine-readable
//! audit trail of every round.

use lobby_application::RoundObserver;
use lobby_domain::{RoundId, RoundOutcome, Vote, VoteDisposition};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL round event logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlRoundLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRoundLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create round event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open round event log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one event record; failures are silently ignored.
    fn log(&self, event_type: &'static str, payload: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp
        let record = if let Value::Object(mut map) = payload {
            map.insert("type".to_string(), Value::String(event_type.to_string()));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            Value::Object(map)
        } else {
            json!({
                "type": event_type,
                "timestamp": timestamp,
                "data": payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush every record for crash safety; the file is append-only
            let _ = writer.flush();
        }
    }
}

impl RoundObserver for JsonlRoundLogger {
    fn on_round_started(&self, round: RoundId, first_vote: &Vote) {
        self.log(
            "round_started",
            json!({
                "round": round,
                "started_at": first_vote.submitted_at,
                "participant_id": first_vote.participant_id,
            }),
        );
    }

    fn on_vote_recorded(&self, round: RoundId, vote: &Vote, disposition: VoteDisposition) {
        self.log(
            "vote_recorded",
            json!({
                "round": round,
                "participant_id": vote.participant_id,
                "lobby_id": vote.lobby_id,
                "submitted_at": vote.submitted_at,
                "disposition": disposition,
            }),
        );
    }

    fn on_round_decided(&self, outcome: &RoundOutcome) {
        let payload = serde_json::to_value(outcome).unwrap_or(Value::Null);
        self.log("round_decided", payload);
    }

    fn on_round_reset(&self, round: RoundId) {
        self.log("round_reset", json!({ "round": round }));
    }
}

impl Drop for JsonlRoundLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::io::Read;

    fn read_lines(path: &Path) -> Vec<Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .trim()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_round_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let logger = JsonlRoundLogger::new(&path).unwrap();

        let round = RoundId::FIRST;
        let vote = Vote::new("pc1", "L1", Utc::now()).unwrap();
        logger.on_round_started(round, &vote);
        logger.on_vote_recorded(round, &vote, VoteDisposition::StartedRound);
        logger.on_round_decided(&RoundOutcome::accepted(round, "L1", Utc::now()));
        logger.on_round_reset(round);

        // Flush
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 4);

        // Each line should be valid JSON with type + timestamp
        for line in &lines {
            assert!(line.get("type").is_some());
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["round"], 1);
        }

        assert_eq!(lines[0]["type"], "round_started");
        assert_eq!(lines[0]["participant_id"], "pc1");

        assert_eq!(lines[1]["type"], "vote_recorded");
        assert_eq!(lines[1]["lobby_id"], "L1");
        assert_eq!(lines[1]["disposition"], "started_round");

        assert_eq!(lines[2]["type"], "round_decided");
        assert_eq!(lines[2]["result"], "Accepted");
        assert_eq!(lines[2]["lobby_id"], "L1");

        assert_eq!(lines[3]["type"], "round_reset");
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rounds.jsonl");

        let logger = JsonlRoundLogger::new(&path).unwrap();
        logger.on_round_reset(RoundId::FIRST);
        drop(logger);

        let logger = JsonlRoundLogger::new(&path).unwrap();
        assert_eq!(logger.path(), path.as_path());
        logger.on_round_reset(RoundId::new(2));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["round"], 2);
    }

    #[test]
    fn test_jsonl_logger_wraps_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let logger = JsonlRoundLogger::new(&path).unwrap();

        logger.log("note", json!("just a string"));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }
}
