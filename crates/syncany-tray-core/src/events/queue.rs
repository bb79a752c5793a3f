//! Hand-off of tray event tokens to a pending blocking listen request.
//!
//! Tokens are only accepted while a listen request is waiting. Clicks made
//! while nobody listens reach the daemon as push frames only, so a later
//! listen request blocks until a new click instead of replaying old ones.

use crate::{CoreError, CoreResult};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use error_location::ErrorLocation;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

/// Create a connected queue/listener pair holding at most `capacity` tokens.
pub fn event_queue(capacity: usize) -> (EventQueue, EventListener) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let listening = Arc::new(AtomicBool::new(false));

    (
        EventQueue {
            tx,
            listening: Arc::clone(&listening),
        },
        EventListener { rx, listening },
    )
}

/// Producer side, used from the UI thread. Never blocks.
#[derive(Debug, Clone)]
pub struct EventQueue {
    tx: mpsc::Sender<String>,
    listening: Arc<AtomicBool>,
}

impl EventQueue {
    /// Hand a token to the pending listen request. Returns `false` if it was
    /// dropped because nobody is listening or the queue is full.
    pub fn push(&self, token: String) -> bool {
        if !self.listening.load(Ordering::Acquire) {
            debug!(token = %token, "No listen request pending, not queueing tray event");
            return false;
        }

        match self.tx.try_send(token) {
            Ok(()) => true,
            Err(TrySendError::Full(token)) => {
                warn!(token = %token, "Event queue full, dropping tray event");
                false
            }
            Err(TrySendError::Closed(token)) => {
                debug!(token = %token, "No event listener, dropping tray event");
                false
            }
        }
    }
}

/// Single consumer side, used by the dispatcher.
#[derive(Debug)]
pub struct EventListener {
    rx: mpsc::Receiver<String>,
    listening: Arc<AtomicBool>,
}

impl EventListener {
    /// Wait, without timeout, for the next click made from now on.
    pub async fn next(&mut self) -> CoreResult<String> {
        while let Ok(stale) = self.rx.try_recv() {
            debug!(token = %stale, "Discarding tray event from before this listen");
        }

        let _listening = Listening::start(&self.listening);

        self.rx
            .recv()
            .await
            .ok_or_else(|| CoreError::EventQueueClosed {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Marks a listen request as pending for as long as it is alive.
struct Listening<'a>(&'a AtomicBool);

impl<'a> Listening<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for Listening<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
