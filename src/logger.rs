use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;

use crate::diff::diff_values;

pub enum MessageLogMode {
    Full,
    Diffed,
}

pub(crate) struct MessageLogger {
    mode: MessageLogMode,
    file: File,
    previous: HashMap<String, Value>,
}

impl MessageLogger {
    pub fn new(mode: MessageLogMode, path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            mode,
            file,
            previous: HashMap::new(),
        })
    }

    pub fn log_command(&mut self, action: &str, zone: Option<&str>, body: &Value) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "cmd",
            "action": action,
            "zone": zone,
            "body": body,
        });
        self.write_line(&entry);
    }

    pub fn log_refresh(&mut self, endpoint: &str, body: &Value) {
        match self.mode {
            MessageLogMode::Full => {
                let entry = json!({
                    "ts": Utc::now().to_rfc3339(),
                    "dir": "refresh",
                    "endpoint": endpoint,
                    "body": body,
                });
                self.write_line(&entry);
            }
            MessageLogMode::Diffed => {
                match self.previous.get(endpoint) {
                    None => {
                        let entry = json!({
                            "ts": Utc::now().to_rfc3339(),
                            "dir": "refresh",
                            "endpoint": endpoint,
                            "full": true,
                            "body": body,
                        });
                        self.write_line(&entry);
                    }
                    Some(prev) => {
                        let changes: Vec<Value> = diff_values(prev, body)
                            .iter()
                            .map(|c| json!({"path": c.path, "old": c.old, "new": c.new}))
                            .collect();
                        let entry = json!({
                            "ts": Utc::now().to_rfc3339(),
                            "dir": "refresh",
                            "endpoint": endpoint,
                            "changes": changes,
                        });
                        self.write_line(&entry);
                    }
                }
                self.previous.insert(endpoint.to_string(), body.clone());
            }
        }
    }

    fn write_line(&mut self, entry: &Value) {
        if let Ok(line) = serde_json::to_string(entry)
            && let Err(e) = writeln!(self.file, "{line}")
        {
            warn!("failed to write log entry: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn read_lines(path: &str) -> Vec<Value> {
        let mut contents = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn log_refresh_writes_ndjson() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Full, path).unwrap();
        logger.log_refresh("status", &json!({"oat": "38"}));

        let lines = read_lines(path);
        assert_eq!(lines[0]["dir"], "refresh");
        assert_eq!(lines[0]["endpoint"], "status");
        assert_eq!(lines[0]["body"]["oat"], "38");
        assert!(lines[0]["ts"].as_str().is_some());
    }

    #[test]
    fn diffed_mode_logs_full_first_then_changes() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Diffed, path).unwrap();

        logger.log_refresh("status", &json!({"oat": "38"}));
        logger.log_refresh("status", &json!({"oat": "40"}));

        let lines = read_lines(path);
        assert_eq!(lines[0]["full"], true);
        assert!(lines[0]["body"].is_object());
        let changes = lines[1]["changes"].as_array().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0]["path"], "oat");
        assert_eq!(changes[0]["old"], "38");
        assert_eq!(changes[0]["new"], "40");
    }

    #[test]
    fn diffed_mode_tracks_endpoints_independently() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Diffed, path).unwrap();

        logger.log_refresh("status", &json!({"oat": "38"}));
        logger.log_refresh("config", &json!({"mode": "heat"}));

        let lines = read_lines(path);
        assert_eq!(lines[0]["full"], true);
        assert_eq!(lines[1]["full"], true);
    }

    #[test]
    fn diffed_mode_no_changes_logs_empty_array() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Diffed, path).unwrap();

        logger.log_refresh("energy", &json!({"energy": {"seer": "16"}}));
        logger.log_refresh("energy", &json!({"energy": {"seer": "16"}}));

        let lines = read_lines(path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["changes"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn log_command_captures_zone() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Full, path).unwrap();
        logger.log_command("set_hold_mode", Some("1"), &json!({"hold": "on"}));

        let lines = read_lines(path);
        assert_eq!(lines[0]["dir"], "cmd");
        assert_eq!(lines[0]["action"], "set_hold_mode");
        assert_eq!(lines[0]["zone"], "1");
        assert_eq!(lines[0]["body"]["hold"], "on");
    }
}
