use crate::{CoreResult, tray::{MenuEntry, TrayIconKind}};

/// Widget-level operations the projector drives.
///
/// Implemented by the UI thread's tray manager on top of the host toolkit.
/// Every method is called from the UI thread only.
pub trait TrayBackend {
    /// Swap the tray icon image.
    fn set_icon(&mut self, icon: TrayIconKind) -> CoreResult<()>;

    /// Change the label of the live status entry and make sure it is shown.
    fn set_status_text(&mut self, text: &str) -> CoreResult<()>;

    /// Replace the whole context menu and make it visible.
    fn install_menu(&mut self, entries: &[MenuEntry]) -> CoreResult<()>;

    /// Ask the notification service to display a notification.
    ///
    /// `image` is a resolved path or URL, never empty.
    fn show_notification(&mut self, summary: &str, body: &str, image: &str) -> CoreResult<()>;
}
