use crate::UiEvent;

use std::{future::Future, panic::Location};

use error_location::ErrorLocation;
use syncany_tray_core::{CoreError, CoreResult, Envelope, Response, UiExecutor};
use tao::event_loop::EventLoopProxy;
use tokio::sync::oneshot;

/// Hands commands from the transport thread to the UI event loop and
/// awaits their result.
#[derive(Clone)]
pub struct UiHandle {
    proxy: EventLoopProxy<UiEvent>,
}

impl UiHandle {
    /// Wrap the event loop proxy.
    pub fn new(proxy: EventLoopProxy<UiEvent>) -> Self {
        Self { proxy }
    }
}

impl UiExecutor for UiHandle {
    fn apply(
        &self,
        envelope: Envelope,
    ) -> impl Future<Output = CoreResult<Option<Response>>> + Send {
        let (reply, reply_rx) = oneshot::channel();

        let sent = self
            .proxy
            .send_event(UiEvent::Apply { envelope, reply })
            .map_err(|_| CoreError::Handoff {
                reason: "UI event loop has exited".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });

        async move {
            sent?;
            reply_rx.await.map_err(|e| CoreError::Handoff {
                reason: format!("UI thread dropped the reply: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
        }
    }
}
