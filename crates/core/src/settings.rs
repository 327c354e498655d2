use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// adb executable used for device commands
    pub adb: PathBuf,
    /// capture program, invoked as `grab <output.png>`
    pub grab: PathBuf,
    /// reference image tree
    pub references: PathBuf,
    pub logs: PathBuf,
    pub log_level: String,
    pub tick_interval_secs: u64,
    pub screenshots_to_keep: usize,
    pub stages_to_keep: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            adb: PathBuf::from("/opt/android-sdk/platform-tools/adb"),
            grab: PathBuf::from("./grab"),
            references: PathBuf::from("references"),
            logs: PathBuf::from("logs"),
            log_level: "debug".to_string(),
            tick_interval_secs: 5,
            screenshots_to_keep: 5,
            stages_to_keep: 20,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(path, json);
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }
}
