//! Websocket link to the controlling daemon.
//!
//! One persistent client connection. Inbound text frames go through the
//! dispatcher one at a time; responses and menu click events share a single
//! outbound channel drained by a write pump. The link never reconnects:
//! when it ends, the caller terminates the process and the daemon restarts
//! the helper.

use crate::{AppError, AppResult, config::EndpointConfig};

use std::panic::Location;

use error_location::ErrorLocation;
use futures_util::{Sink, SinkExt, StreamExt};
use syncany_tray_core::{CoreError, CoreResult, Dispatcher, FrameSink, UiExecutor};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::{
    self, Message,
    client::IntoClientRequest,
    handshake::client::Request,
    http::{HeaderName, HeaderValue},
};
use tracing::{debug, info, instrument, trace, warn};

const CLIENT_ID_HEADER: &str = "client_id";

/// Create the outbound frame channel.
pub fn outbound_channel() -> (OutboundLink, mpsc::UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (OutboundLink { tx }, rx)
}

/// Sending side of the outbound channel. Cheap to clone, never blocks.
#[derive(Debug, Clone)]
pub struct OutboundLink {
    tx: mpsc::UnboundedSender<String>,
}

impl FrameSink for OutboundLink {
    #[track_caller]
    fn send_frame(&self, frame: String) -> CoreResult<()> {
        let location = ErrorLocation::from(Location::caller());
        self.tx
            .send(frame)
            .map_err(|_| CoreError::LinkClosed { location })
    }
}

/// Build the websocket handshake request, tagged with the client id header.
#[track_caller]
pub fn handshake_request(endpoint: &EndpointConfig) -> AppResult<Request> {
    let mut request =
        endpoint
            .url()
            .into_client_request()
            .map_err(|e| AppError::TransportError {
                reason: format!("Invalid endpoint {}: {}", endpoint.url(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;

    let value =
        HeaderValue::from_str(&endpoint.client_id).map_err(|e| AppError::TransportError {
            reason: format!("Invalid client id '{}': {}", endpoint.client_id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    request
        .headers_mut()
        .insert(HeaderName::from_static(CLIENT_ID_HEADER), value);

    Ok(request)
}

/// Connect and serve the link until it ends.
///
/// Returns `Ok(())` when the daemon closed the connection and an error for
/// any transport failure. Either way the link is gone for good.
#[instrument(skip_all, fields(url = %endpoint.url()))]
pub async fn run<U: UiExecutor>(
    endpoint: &EndpointConfig,
    mut dispatcher: Dispatcher<U>,
    outbound: OutboundLink,
    outbound_rx: mpsc::UnboundedReceiver<String>,
) -> AppResult<()> {
    let request = handshake_request(endpoint)?;

    let (ws_stream, _) =
        tokio_tungstenite::connect_async(request)
            .await
            .map_err(|e| AppError::TransportError {
                reason: format!("Failed to connect: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

    info!(client_id = %endpoint.client_id, "Connected to daemon");

    let (write, mut read) = ws_stream.split();
    let mut writer = tokio::spawn(write_pump(write, outbound_rx));

    let result = loop {
        tokio::select! {
            joined = &mut writer => {
                break match joined {
                    Ok(Ok(())) => Err(AppError::TransportError {
                        reason: "Outbound channel closed".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }),
                    Ok(Err(e)) => Err(e),
                    Err(e) => Err(AppError::TransportError {
                        reason: format!("Write pump panicked: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    }),
                };
            }

            message = read.next() => {
                match message {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(response) = dispatcher.handle_frame(text.as_str()).await {
                            debug!(response = %response, "Sending response");
                            outbound.send_frame(response.as_frame().to_string())?;
                        }
                    }
                    Some(Ok(Message::Close(frame))) => {
                        info!(frame = ?frame, "Daemon closed the connection");
                        break Ok(());
                    }
                    Some(Ok(other)) => trace!(message = ?other, "Ignoring non-text frame"),
                    Some(Err(e)) => {
                        break Err(AppError::TransportError {
                            reason: format!("Read failed: {}", e),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    None => {
                        info!("Connection stream ended");
                        break Ok(());
                    }
                }
            }
        }
    };

    writer.abort();
    result
}

/// Write every outbound frame to the socket, in order.
///
/// Ends with `Ok(())` once all senders are gone, or with the first write error.
async fn write_pump<S>(mut write: S, mut outbound_rx: mpsc::UnboundedReceiver<String>) -> AppResult<()>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    while let Some(frame) = outbound_rx.recv().await {
        trace!(frame = %frame, "Writing frame");
        write
            .send(Message::text(frame))
            .await
            .map_err(|e| AppError::TransportError {
                reason: format!("Write failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    warn!("Outbound channel closed, write pump stopping");
    Ok(())
}
