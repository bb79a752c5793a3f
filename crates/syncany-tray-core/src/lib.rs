//! Syncany Tray Core Library
//!
//! Protocol, dispatch and state projection for the Syncany tray helper.
//! The host toolkit and the socket are reached through [`TrayBackend`],
//! [`UiExecutor`] and [`FrameSink`], so everything here runs headless.
//!
//! # Example
//!
//! ```
//! use syncany_tray_core::{Response, parse_frame};
//!
//! let envelope = parse_frame(r#"{"request":"NopRequest"}"#);
//! assert!(envelope.is_ok());
//!
//! let rejected = parse_frame("not json").map(|_| ()).unwrap_err();
//! assert_eq!(rejected.response(), Response::InvalidRequest);
//! ```

mod dispatcher;
mod error;
mod events;
mod protocol;
mod tray;

pub use {
    dispatcher::{Dispatcher, UiExecutor},
    error::{CoreError, Result as CoreResult},
    events::{EventEmitter, EventListener, EventQueue, FrameSink, event_queue},
    protocol::{
        Command, CommandKind, Envelope, Folder, IconStatus, Notification, Profile, ProfileTree,
        Rejection, RequestStyle, Response, parse_frame,
    },
    tray::{
        MenuAction, MenuCommand, MenuEntry, MenuLayout, ProjectorSettings, TrayBackend,
        TrayIconKind, TrayProjector, TrayState, build_menu,
    },
};

#[cfg(test)]
mod tests;
