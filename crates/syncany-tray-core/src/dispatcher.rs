//! Routes inbound frames to their handlers.
//!
//! The dispatcher lives on the transport thread. Listen requests are served
//! here from the event queue; everything else is handed to the UI thread
//! through a [`UiExecutor`] and awaited, so frames are handled strictly one
//! at a time in arrival order.

use crate::{
    CoreResult,
    events::EventListener,
    protocol::{Command, Envelope, Response, parse_frame},
};

use std::future::Future;

use tracing::{debug, error, instrument, warn};

/// Runs a command on the thread that owns the tray widgets.
pub trait UiExecutor {
    /// Apply `envelope` on the UI thread and resolve with its result.
    fn apply(&self, envelope: Envelope) -> impl Future<Output = CoreResult<Option<Response>>> + Send;
}

/// Parses, routes and answers inbound frames.
pub struct Dispatcher<U> {
    ui: U,
    events: EventListener,
}

impl<U: UiExecutor> Dispatcher<U> {
    /// Create a dispatcher handing UI work to `ui` and serving listen
    /// requests from `events`.
    pub fn new(ui: U, events: EventListener) -> Self {
        Self { ui, events }
    }

    /// Handle one inbound frame. Never fails; errors become response frames.
    #[instrument(skip_all)]
    pub async fn handle_frame(&mut self, frame: &str) -> Option<Response> {
        debug!(frame = %frame, "Received request");

        let envelope = match parse_frame(frame) {
            Ok(envelope) => envelope,
            Err(rejection) => {
                warn!(rejection = ?rejection, "Rejected request");
                return Some(rejection.response());
            }
        };

        let result = match envelope.command {
            Command::ListenForEvent => self.listen_for_event().await,
            _ => self.ui.apply(envelope).await,
        };

        match result {
            Ok(response) => response,
            Err(e) => {
                error!(error = ?e, "Request failed");
                Some(Response::RequestError)
            }
        }
    }

    async fn listen_for_event(&mut self) -> CoreResult<Option<Response>> {
        debug!("Listening for tray event");
        let token = self.events.next().await?;
        debug!(token = %token, "Tray event occurred, passing on");
        Ok(Some(Response::Event(token)))
    }
}
