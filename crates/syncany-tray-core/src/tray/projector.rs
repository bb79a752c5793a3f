//! Projects inbound commands onto tray state and widgets.
//!
//! Runs on the UI thread. Every handler is safe to re-run with the same
//! command: the icon only changes on counter transitions and the menu is
//! rebuilt from scratch each time.

use crate::{
    CoreError, CoreResult,
    protocol::{Command, Envelope, IconStatus, Notification, ProfileTree, Response},
    tray::{MenuLayout, TrayBackend, TrayIconKind, TrayState, build_menu},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Static inputs the handlers need besides the command itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectorSettings {
    /// Image shown with notifications that do not name one.
    pub default_image: String,
    /// Fixed menu layout.
    pub menu: MenuLayout,
}

/// Owns [`TrayState`] and drives a [`TrayBackend`] from commands.
pub struct TrayProjector<B> {
    state: TrayState,
    backend: B,
    settings: ProjectorSettings,
}

impl<B: TrayBackend> TrayProjector<B> {
    /// Create the projector and render the startup tray: disconnected icon
    /// and a menu without profiles.
    #[track_caller]
    #[instrument(skip(backend, settings))]
    pub fn new(backend: B, settings: ProjectorSettings, status_text: &str) -> CoreResult<Self> {
        let mut projector = Self {
            state: TrayState::new(status_text),
            backend,
            settings,
        };

        projector.backend.set_icon(TrayIconKind::Disconnected)?;
        projector.update_menu(&ProfileTree::default())?;

        info!("Tray state initialized");

        Ok(projector)
    }

    /// Run the handler for one command and return its acknowledgement.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn apply(&mut self, envelope: Envelope) -> CoreResult<Option<Response>> {
        let acknowledgement = envelope.acknowledgement();

        match envelope.command {
            Command::Notify(notification) => self.notify(&notification)?,
            Command::UpdateMenu(profiles) => self.update_menu(&profiles)?,
            Command::UpdateIcon(status) => self.update_icon(status)?,
            Command::UpdateStatusText(text) => self.update_status_text(text)?,
            Command::Nop => debug!("Nop"),
            Command::ListenForEvent => {
                return Err(CoreError::Protocol {
                    kind: "ListenForEvent".to_string(),
                    reason: "listen requests are served by the dispatcher, not the UI thread"
                        .to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(acknowledgement)
    }

    /// Current tray state.
    pub fn state(&self) -> &TrayState {
        &self.state
    }

    /// The backend being driven.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn notify(&mut self, notification: &Notification) -> CoreResult<()> {
        let image = if notification.image.is_empty() {
            self.settings.default_image.as_str()
        } else {
            notification.image.as_str()
        };

        debug!(summary = %notification.summary, image = %image, "Showing notification");

        self.backend
            .show_notification(&notification.summary, &notification.body, image)
    }

    fn update_icon(&mut self, status: IconStatus) -> CoreResult<()> {
        match status {
            IconStatus::Disconnected => {
                self.state.updating = 0;
                self.set_icon(TrayIconKind::Disconnected)?;
            }
            IconStatus::Updating => {
                self.state.updating = self.state.updating.saturating_add(1);
                if self.state.updating == 1 {
                    self.set_icon(TrayIconKind::Syncing)?;
                }
            }
            IconStatus::UpToDate => {
                self.state.updating = self.state.updating.saturating_sub(1);
                if self.state.updating == 0 && self.state.icon != TrayIconKind::UpToDate {
                    self.set_icon(TrayIconKind::UpToDate)?;
                }
            }
        }

        debug!(updating = self.state.updating, icon = ?self.state.icon, "Icon status applied");

        Ok(())
    }

    fn set_icon(&mut self, icon: TrayIconKind) -> CoreResult<()> {
        self.backend.set_icon(icon)?;
        self.state.icon = icon;
        Ok(())
    }

    fn update_status_text(&mut self, text: String) -> CoreResult<()> {
        self.backend.set_status_text(&text)?;
        self.state.status_text = text;
        Ok(())
    }

    fn update_menu(&mut self, profiles: &ProfileTree) -> CoreResult<()> {
        let menu = build_menu(&self.state.status_text, profiles, self.settings.menu);

        self.backend.install_menu(&menu)?;

        debug!(entries = menu.len(), profiles = profiles.profiles().len(), "Menu rebuilt");
        self.state.menu = menu;

        Ok(())
    }
}
