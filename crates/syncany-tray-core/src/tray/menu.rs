//! Toolkit-independent model of the tray context menu.
//!
//! The menu is always rebuilt from scratch, so rendering the same inputs
//! twice yields identical entries in identical order.

use crate::protocol::{Folder, ProfileTree};

use std::path::Path;

const FOLDER_ID_PREFIX: &str = "folder:";

/// Fixed menu commands reported back to the controlling process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Start the new sync folder wizard.
    NewFolder,
    /// Open the preferences dialog.
    Preferences,
    /// Open the donation page.
    Donate,
    /// Open the project website.
    Website,
    /// Shut the client down.
    Quit,
}

impl MenuCommand {
    /// Wire token for this command.
    pub fn token(self) -> &'static str {
        match self {
            MenuCommand::NewFolder => "NEW",
            MenuCommand::Preferences => "PREFERENCES",
            MenuCommand::Donate => "DONATE",
            MenuCommand::Website => "WEBSITE",
            MenuCommand::Quit => "QUIT",
        }
    }

    /// Menu label for this command.
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::NewFolder => "New sync folder",
            MenuCommand::Preferences => "Preferences",
            MenuCommand::Donate => "Donate",
            MenuCommand::Website => "Website",
            MenuCommand::Quit => "Quit",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NEW" => Some(MenuCommand::NewFolder),
            "PREFERENCES" => Some(MenuCommand::Preferences),
            "DONATE" => Some(MenuCommand::Donate),
            "WEBSITE" => Some(MenuCommand::Website),
            "QUIT" => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}

/// What activating a menu entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// A fixed command.
    Command(MenuCommand),
    /// Open the given folder.
    OpenFolder(String),
}

impl MenuAction {
    /// Stable widget id encoding this action.
    pub fn id(&self) -> String {
        match self {
            MenuAction::Command(command) => command.token().to_string(),
            MenuAction::OpenFolder(path) => format!("{}{}", FOLDER_ID_PREFIX, path),
        }
    }

    /// Decode a widget id produced by [`MenuAction::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        match id.strip_prefix(FOLDER_ID_PREFIX) {
            Some(path) => Some(MenuAction::OpenFolder(path.to_string())),
            None => MenuCommand::from_token(id).map(MenuAction::Command),
        }
    }
}

/// One entry of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Disabled status line.
    Status(String),
    /// Horizontal separator.
    Separator,
    /// Clickable entry.
    Item {
        /// Displayed text.
        label: String,
        /// Action on activation.
        action: MenuAction,
    },
    /// Nested menu.
    Submenu {
        /// Displayed text.
        label: String,
        /// Nested entries.
        entries: Vec<MenuEntry>,
    },
}

/// Layout switches for the fixed part of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    /// Show the "New sync folder" entry.
    pub show_new_folder: bool,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            show_new_folder: true,
        }
    }
}

/// Render the complete menu.
pub fn build_menu(status_text: &str, profiles: &ProfileTree, layout: MenuLayout) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry::Status(status_text.to_string()), MenuEntry::Separator];

    match profiles.profiles() {
        [] => {}
        [single] => {
            entries.extend(single.folders.iter().map(folder_entry));
            entries.push(MenuEntry::Separator);
        }
        many => {
            entries.extend(many.iter().map(|profile| MenuEntry::Submenu {
                label: display_name(&profile.name),
                entries: profile.folders.iter().map(folder_entry).collect(),
            }));
            entries.push(MenuEntry::Separator);
        }
    }

    if layout.show_new_folder {
        entries.push(command_entry(MenuCommand::NewFolder));
    }
    entries.push(command_entry(MenuCommand::Preferences));
    entries.push(MenuEntry::Separator);
    entries.push(command_entry(MenuCommand::Donate));
    entries.push(command_entry(MenuCommand::Website));
    entries.push(MenuEntry::Separator);
    entries.push(command_entry(MenuCommand::Quit));

    entries
}

fn command_entry(command: MenuCommand) -> MenuEntry {
    MenuEntry::Item {
        label: command.label().to_string(),
        action: MenuAction::Command(command),
    }
}

fn folder_entry(folder: &Folder) -> MenuEntry {
    MenuEntry::Item {
        label: display_name(&folder.folder),
        action: MenuAction::OpenFolder(folder.folder.clone()),
    }
}

/// Last path component, or the whole string when there is none.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
