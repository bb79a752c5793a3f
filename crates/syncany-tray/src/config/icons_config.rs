use serde::{Deserialize, Serialize};

/// Icon asset paths, relative to the resource directory given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Shown while disconnected or idle.
    pub disconnected: String,
    /// Shown while at least one sync operation is running.
    pub syncing: String,
    /// Shown once everything is synced.
    pub up_to_date: String,
    /// Shown with notifications that name no image.
    pub notification: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            disconnected: "tray/tray.png".to_string(),
            syncing: "tray/tray-syncing1.png".to_string(),
            up_to_date: "tray/tray-uptodate.png".to_string(),
            notification: "logo48.png".to_string(),
        }
    }
}
