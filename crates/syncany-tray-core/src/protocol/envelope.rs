use crate::protocol::{Command, CommandKind, Response};

/// Which wire vocabulary a command arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStyle {
    /// `{"request": "...Request"}`: every handled command is acknowledged.
    Request,
    /// `{"action": "..."}`: notifications and status text are fire-and-forget.
    Action,
}

impl RequestStyle {
    /// Response sent after a handler for `kind` completed successfully.
    pub fn acknowledge(self, kind: CommandKind) -> Option<Response> {
        match (self, kind) {
            (RequestStyle::Action, CommandKind::Notify | CommandKind::UpdateStatusText) => None,
            _ => Some(Response::Ok),
        }
    }
}

/// A decoded command together with the style it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Wire vocabulary of the frame.
    pub style: RequestStyle,
    /// The decoded command.
    pub command: Command,
}

impl Envelope {
    /// Wrap a command.
    pub fn new(style: RequestStyle, command: Command) -> Self {
        Self { style, command }
    }

    /// Acknowledgement for this envelope once its handler has succeeded.
    pub fn acknowledgement(&self) -> Option<Response> {
        self.style.acknowledge(self.command.kind())
    }
}
