mod backend;
mod menu;
mod projector;
mod state;

pub use {
    backend::TrayBackend,
    menu::{MenuAction, MenuCommand, MenuEntry, MenuLayout, build_menu},
    projector::{ProjectorSettings, TrayProjector},
    state::{TrayIconKind, TrayState},
};
