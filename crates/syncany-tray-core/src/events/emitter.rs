//! Turns menu activations into outbound frames.

use crate::{CoreError, CoreResult, events::EventQueue, tray::MenuAction};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Outbound half of the transport, as seen from the UI thread.
pub trait FrameSink {
    /// Queue one text frame for sending. Must not block.
    fn send_frame(&self, frame: String) -> CoreResult<()>;
}

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum TrayEvent<'a> {
    TrayMenuItemClicked { command: &'a str },
    TrayMenuFolderClicked { folder: &'a str },
}

/// Emits push frames for menu clicks and hands them to a pending listen request.
pub struct EventEmitter<S> {
    sink: S,
    queue: EventQueue,
}

impl<S: FrameSink> EventEmitter<S> {
    /// Create an emitter writing to `sink` and feeding `queue`.
    pub fn new(sink: S, queue: EventQueue) -> Self {
        Self { sink, queue }
    }

    /// Emit the event for a menu widget id.
    ///
    /// Returns `Ok(false)` for ids that carry no action, such as the
    /// status line.
    #[instrument(skip(self))]
    pub fn emit_for_id(&self, id: &str) -> CoreResult<bool> {
        match MenuAction::from_id(id) {
            Some(action) => self.emit(&action).map(|()| true),
            None => {
                debug!("Ignoring activation of passive menu entry");
                Ok(false)
            }
        }
    }

    /// Push the frame for `action` and offer its token to the event queue.
    #[track_caller]
    pub fn emit(&self, action: &MenuAction) -> CoreResult<()> {
        let (event, token) = match action {
            MenuAction::Command(command) => (
                TrayEvent::TrayMenuItemClicked {
                    command: command.token(),
                },
                command.token().to_string(),
            ),
            MenuAction::OpenFolder(path) => (
                TrayEvent::TrayMenuFolderClicked { folder: path },
                format!("OPEN_FOLDER\t{}", path),
            ),
        };

        let frame = serde_json::to_string(&event).map_err(|e| CoreError::Protocol {
            kind: "tray event".to_string(),
            reason: format!("Failed to encode event: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(token = %token, "Menu item clicked");

        self.queue.push(token);
        self.sink.send_frame(frame)
    }
}
