use error_location::ErrorLocation;
use thiserror::Error;

/// Tray core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A recognised command carried a missing or malformed payload.
    #[error("Malformed {kind} payload: {reason} {location}")]
    Protocol {
        /// Discriminator of the command being decoded.
        kind: String,
        /// Description of the decoding failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The tray toolkit or notification service rejected an operation.
    #[error("Tray backend error: {reason} {location}")]
    Backend {
        /// Description of the backend failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Handing a command to the UI thread, or receiving its reply, failed.
    #[error("UI hand-off failed: {reason} {location}")]
    Handoff {
        /// Description of the hand-off failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The outbound half of the transport link is gone.
    #[error("Transport link closed {location}")]
    LinkClosed {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Every producer of tray events has gone away.
    #[error("Event queue closed {location}")]
    EventQueueClosed {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
