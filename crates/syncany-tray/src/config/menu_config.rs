use crate::config::default_true;

use serde::{Deserialize, Serialize};

/// Context menu configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Offer the "New sync folder" entry.
    #[serde(default = "default_true")]
    pub show_new_folder: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_new_folder: true,
        }
    }
}
