use crate::{
    CoreError,
    protocol::{
        Command, CommandKind, Envelope, IconStatus, Notification, ProfileTree, RequestStyle,
        Response,
    },
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Why an inbound frame did not decode into a command.
#[derive(Debug)]
pub enum Rejection {
    /// Not JSON, not an object, or no string discriminator.
    Invalid {
        /// Description of what was wrong with the frame.
        reason: String,
    },
    /// The discriminator named no known command.
    Unknown {
        /// The unrecognised discriminator.
        discriminator: String,
    },
    /// A known command with a missing or malformed payload.
    Malformed(CoreError),
}

impl Rejection {
    /// Fixed response frame for this rejection.
    pub fn response(&self) -> Response {
        match self {
            Rejection::Invalid { .. } => Response::InvalidRequest,
            Rejection::Unknown { .. } => Response::UnknownRequest,
            Rejection::Malformed(_) => Response::RequestError,
        }
    }
}

#[derive(Deserialize)]
struct IconPayload {
    status: IconStatus,
}

#[derive(Deserialize)]
struct StatusTextPayload {
    #[serde(alias = "status")]
    text: String,
}

#[derive(Deserialize)]
struct MenuPayload {
    #[serde(default)]
    profiles: ProfileTree,
}

/// Decode one text frame into a command envelope.
#[track_caller]
pub fn parse_frame(frame: &str) -> Result<Envelope, Rejection> {
    let value: Value = serde_json::from_str(frame).map_err(|e| Rejection::Invalid {
        reason: format!("not JSON: {}", e),
    })?;

    let Value::Object(object) = value else {
        return Err(Rejection::Invalid {
            reason: "frame is not a JSON object".to_string(),
        });
    };

    let (style, name) = discriminator(&object)?;

    let kind =
        CommandKind::from_discriminator(style, &name).ok_or_else(|| Rejection::Unknown {
            discriminator: name.clone(),
        })?;

    let command = match kind {
        CommandKind::Notify => Command::Notify(payload::<Notification>(&name, object)?),
        CommandKind::UpdateMenu => {
            Command::UpdateMenu(payload::<MenuPayload>(&name, object)?.profiles)
        }
        CommandKind::UpdateIcon => Command::UpdateIcon(payload::<IconPayload>(&name, object)?.status),
        CommandKind::UpdateStatusText => {
            Command::UpdateStatusText(payload::<StatusTextPayload>(&name, object)?.text)
        }
        CommandKind::ListenForEvent => Command::ListenForEvent,
        CommandKind::Nop => Command::Nop,
    };

    Ok(Envelope::new(style, command))
}

fn discriminator(object: &Map<String, Value>) -> Result<(RequestStyle, String), Rejection> {
    let (style, value) = match (object.get("request"), object.get("action")) {
        (Some(value), _) => (RequestStyle::Request, value),
        (None, Some(value)) => (RequestStyle::Action, value),
        (None, None) => {
            return Err(Rejection::Invalid {
                reason: "missing 'request' or 'action' field".to_string(),
            });
        }
    };

    match value.as_str() {
        Some(name) => Ok((style, name.to_string())),
        None => Err(Rejection::Invalid {
            reason: format!("discriminator is not a string: {}", value),
        }),
    }
}

#[track_caller]
fn payload<T: DeserializeOwned>(kind: &str, object: Map<String, Value>) -> Result<T, Rejection> {
    let location = ErrorLocation::from(Location::caller());
    serde_json::from_value(Value::Object(object)).map_err(|e| {
        Rejection::Malformed(CoreError::Protocol {
            kind: kind.to_string(),
            reason: e.to_string(),
            location,
        })
    })
}
