use crate::tray::MenuEntry;

/// Which icon asset the tray currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconKind {
    /// Idle or not connected to the daemon.
    Disconnected,
    /// At least one sync operation in flight.
    Syncing,
    /// Everything synced.
    UpToDate,
}

/// Process-wide tray state, owned by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayState {
    pub(crate) icon: TrayIconKind,
    pub(crate) updating: u32,
    pub(crate) status_text: String,
    pub(crate) menu: Vec<MenuEntry>,
}

impl TrayState {
    /// Startup state: disconnected, nothing in flight, empty menu.
    pub fn new(status_text: impl Into<String>) -> Self {
        Self {
            icon: TrayIconKind::Disconnected,
            updating: 0,
            status_text: status_text.into(),
            menu: Vec::new(),
        }
    }

    /// Icon currently shown.
    pub fn icon(&self) -> TrayIconKind {
        self.icon
    }

    /// Number of sync operations reported as in flight.
    pub fn updating(&self) -> u32 {
        self.updating
    }

    /// Last known status line.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Menu as last installed.
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }
}
