use crate::config::IconsConfig;

use std::path::{Path, PathBuf};

use syncany_tray_core::TrayIconKind;

/// Absolute locations of the icon assets inside the resource directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayAssets {
    disconnected: PathBuf,
    syncing: PathBuf,
    up_to_date: PathBuf,
    notification: PathBuf,
}

impl TrayAssets {
    /// Resolve the configured asset names against `resource_dir`.
    pub fn new(resource_dir: &Path, icons: &IconsConfig) -> Self {
        Self {
            disconnected: resource_dir.join(&icons.disconnected),
            syncing: resource_dir.join(&icons.syncing),
            up_to_date: resource_dir.join(&icons.up_to_date),
            notification: resource_dir.join(&icons.notification),
        }
    }

    /// Image file for a tray icon state.
    pub fn icon_path(&self, kind: TrayIconKind) -> &Path {
        match kind {
            TrayIconKind::Disconnected => &self.disconnected,
            TrayIconKind::Syncing => &self.syncing,
            TrayIconKind::UpToDate => &self.up_to_date,
        }
    }

    /// Image shown with notifications that name none.
    pub fn notification_image(&self) -> &Path {
        &self.notification
    }
}
