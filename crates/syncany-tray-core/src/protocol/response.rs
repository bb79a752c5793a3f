use std::fmt;

/// Outbound reply to one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The command was handled.
    Ok,
    /// The discriminator named no known command.
    UnknownRequest,
    /// The frame was not a JSON command object.
    InvalidRequest,
    /// Handling a recognised command failed.
    RequestError,
    /// A tray event token, answering a listen request.
    Event(String),
}

impl Response {
    /// Text frame sent on the wire.
    pub fn as_frame(&self) -> &str {
        match self {
            Response::Ok => "OK",
            Response::UnknownRequest => "UNKNOWN_REQUEST",
            Response::InvalidRequest => "INVALID_REQUEST",
            Response::RequestError => "REQUEST_ERROR",
            Response::Event(token) => token,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_frame())
    }
}
