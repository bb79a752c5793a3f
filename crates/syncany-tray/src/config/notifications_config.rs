use crate::config::default_app_name;

use serde::{Deserialize, Serialize};

/// Desktop notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Application name reported to the notification service.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}
