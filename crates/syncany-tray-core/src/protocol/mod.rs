//! Wire protocol spoken with the controlling process.
//!
//! Inbound frames are JSON objects discriminated either by a `request` field
//! (`"NotifyRequest"`, `"UpdateMenuRequest"`, ...) or by an `action` field
//! (`"display_notification"`, `"update_tray_menu"`, ...). Both spellings
//! decode into the same [`Command`] and differ only in which commands are
//! acknowledged with a response frame.

mod command;
mod envelope;
mod parser;
mod profile_tree;
mod response;

pub use {
    command::{Command, CommandKind, IconStatus, Notification},
    envelope::{Envelope, RequestStyle},
    parser::{Rejection, parse_frame},
    profile_tree::{Folder, Profile, ProfileTree},
    response::Response,
};
