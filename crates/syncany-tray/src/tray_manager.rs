//! System tray icon, context menu and desktop notifications.
//!
//! Renders the toolkit-independent menu model onto `tray-icon` widgets and
//! forwards notifications to the desktop notification service. Lives on
//! the main thread only.

use crate::{AppError, AppResult, TrayAssets};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use notify_rust::Notification;
use syncany_tray_core::{CoreResult, MenuEntry, TrayBackend, TrayIconKind};
use tracing::{debug, info, instrument};
use tray_icon::menu::{IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const STATUS_ITEM_ID: &str = "status";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    status_item: Option<MenuItem>,
    assets: TrayAssets,
    app_name: String,
}

impl TrayManager {
    /// Create the tray icon showing the disconnected image. The menu is
    /// installed separately once the initial state is projected.
    #[track_caller]
    #[instrument]
    pub fn new(assets: TrayAssets, app_name: String) -> AppResult<Self> {
        let icon = Self::load_icon(assets.icon_path(TrayIconKind::Disconnected))?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(&app_name)
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            status_item: None,
            assets,
            app_name,
        })
    }

    /// Load an icon image from the resource directory.
    #[track_caller]
    fn load_icon(path: &Path) -> AppResult<Icon> {
        let img = image::open(path).map_err(|e| AppError::TrayError {
            reason: format!("Failed to load icon {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Turn menu model entries into toolkit widgets, remembering the
    /// status item so its label can be updated in place.
    #[track_caller]
    fn build_items(&mut self, entries: &[MenuEntry]) -> AppResult<Vec<Box<dyn IsMenuItem>>> {
        let mut items: Vec<Box<dyn IsMenuItem>> = Vec::with_capacity(entries.len());

        for entry in entries {
            match entry {
                MenuEntry::Status(text) => {
                    let item = MenuItem::with_id(MenuId::new(STATUS_ITEM_ID), text, false, None);
                    self.status_item = Some(item.clone());
                    items.push(Box::new(item));
                }
                MenuEntry::Separator => items.push(Box::new(PredefinedMenuItem::separator())),
                MenuEntry::Item { label, action } => {
                    items.push(Box::new(MenuItem::with_id(
                        MenuId::new(action.id()),
                        label,
                        true,
                        None,
                    )));
                }
                MenuEntry::Submenu { label, entries } => {
                    let children = self.build_items(entries)?;
                    let refs: Vec<&dyn IsMenuItem> = children.iter().map(|c| &**c).collect();
                    let submenu =
                        Submenu::with_items(label, true, &refs).map_err(|e| AppError::TrayError {
                            reason: format!("Failed to build submenu '{}': {}", label, e),
                            location: ErrorLocation::from(Location::caller()),
                        })?;
                    items.push(Box::new(submenu));
                }
            }
        }

        Ok(items)
    }

    fn tooltip(&self, status_text: &str) -> String {
        format!("{} - {}", self.app_name, status_text)
    }
}

impl TrayBackend for TrayManager {
    #[instrument(skip(self))]
    fn set_icon(&mut self, icon: TrayIconKind) -> CoreResult<()> {
        let image = Self::load_icon(self.assets.icon_path(icon))?;

        self.tray_icon
            .set_icon(Some(image))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(icon = ?icon, "Tray icon updated");

        Ok(())
    }

    #[instrument(skip(self))]
    fn set_status_text(&mut self, text: &str) -> CoreResult<()> {
        if let Some(item) = &self.status_item {
            item.set_text(text);
        }

        self.tray_icon
            .set_tooltip(Some(self.tooltip(text)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    #[instrument(skip_all)]
    fn install_menu(&mut self, entries: &[MenuEntry]) -> CoreResult<()> {
        let items = self.build_items(entries)?;
        let refs: Vec<&dyn IsMenuItem> = items.iter().map(|i| &**i).collect();

        let menu = Menu::with_items(&refs).map_err(|e| AppError::TrayError {
            reason: format!("Failed to build menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.tray_icon.set_menu(Some(Box::new(menu)));

        self.tray_icon
            .set_visible(true)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to show tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(entries = entries.len(), "Menu installed");

        Ok(())
    }

    #[instrument(skip(self, body))]
    fn show_notification(&mut self, summary: &str, body: &str, image: &str) -> CoreResult<()> {
        let _handle = Notification::new()
            .appname(&self.app_name)
            .summary(summary)
            .body(body)
            .icon(image)
            .show()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to show notification: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}
