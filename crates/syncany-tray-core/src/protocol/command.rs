use crate::protocol::{ProfileTree, RequestStyle};

use serde::Deserialize;

/// A decoded inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a desktop notification.
    Notify(Notification),
    /// Rebuild the tray menu from the given profiles.
    UpdateMenu(ProfileTree),
    /// Report a sync status change for the tray icon.
    UpdateIcon(IconStatus),
    /// Replace the status line shown at the top of the menu.
    UpdateStatusText(String),
    /// Block until the user triggers a tray event, then return it.
    ListenForEvent,
    /// Liveness probe.
    Nop,
}

impl Command {
    /// The kind of this command, independent of its payload.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Notify(_) => CommandKind::Notify,
            Command::UpdateMenu(_) => CommandKind::UpdateMenu,
            Command::UpdateIcon(_) => CommandKind::UpdateIcon,
            Command::UpdateStatusText(_) => CommandKind::UpdateStatusText,
            Command::ListenForEvent => CommandKind::ListenForEvent,
            Command::Nop => CommandKind::Nop,
        }
    }
}

/// Payload-free command discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `NotifyRequest` / `display_notification`.
    Notify,
    /// `UpdateMenuRequest` / `update_tray_menu`.
    UpdateMenu,
    /// `UpdateStatusIconRequest` / `update_tray_icon`.
    UpdateIcon,
    /// `UpdateStatusTextRequest` / `update_tray_status_text`.
    UpdateStatusText,
    /// `ListenForTrayEventRequest` / `listen_for_tray_event`.
    ListenForEvent,
    /// `NopRequest` / `nop`.
    Nop,
}

impl CommandKind {
    /// Resolve a wire discriminator in the given style.
    ///
    /// Returns `None` when the name is not part of that style's vocabulary;
    /// a request-style name sent under `action` is not recognised.
    pub fn from_discriminator(style: RequestStyle, name: &str) -> Option<Self> {
        let kind = match (style, name) {
            (RequestStyle::Request, "NotifyRequest") => CommandKind::Notify,
            (RequestStyle::Request, "UpdateMenuRequest") => CommandKind::UpdateMenu,
            (RequestStyle::Request, "UpdateStatusIconRequest") => CommandKind::UpdateIcon,
            (RequestStyle::Request, "UpdateStatusTextRequest") => CommandKind::UpdateStatusText,
            (RequestStyle::Request, "ListenForTrayEventRequest") => CommandKind::ListenForEvent,
            (RequestStyle::Request, "NopRequest") => CommandKind::Nop,
            (RequestStyle::Action, "display_notification") => CommandKind::Notify,
            (RequestStyle::Action, "update_tray_menu") => CommandKind::UpdateMenu,
            (RequestStyle::Action, "update_tray_icon") => CommandKind::UpdateIcon,
            (RequestStyle::Action, "update_tray_status_text") => CommandKind::UpdateStatusText,
            (RequestStyle::Action, "listen_for_tray_event") => CommandKind::ListenForEvent,
            (RequestStyle::Action, "nop") => CommandKind::Nop,
            _ => return None,
        };
        Some(kind)
    }
}

/// Notification payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notification {
    /// Title line.
    pub summary: String,
    /// Body text.
    pub body: String,
    /// Image path or URL. Empty means the bundled logo.
    #[serde(default)]
    pub image: String,
}

/// Sync status reported by the controlling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IconStatus {
    /// The daemon is not reachable.
    #[serde(rename = "DISCONNECTED")]
    Disconnected,
    /// One more sync operation has started.
    #[serde(rename = "UPDATING")]
    Updating,
    /// One sync operation has finished.
    #[serde(rename = "UPTODATE")]
    UpToDate,
}
