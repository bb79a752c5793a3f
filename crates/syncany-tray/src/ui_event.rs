use syncany_tray_core::{CoreResult, Envelope, Response};
use tokio::sync::oneshot;
use tray_icon::menu::MenuEvent;

/// Events delivered to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so every tray mutation and every menu click flows through this enum.
#[derive(Debug)]
pub enum UiEvent {
    /// Apply a command and send the result back to the transport thread.
    Apply {
        /// The decoded command.
        envelope: Envelope,
        /// Always answered, also when the handler fails.
        reply: oneshot::Sender<CoreResult<Option<Response>>>,
    },
    /// A context menu entry was activated.
    Menu(MenuEvent),
}
