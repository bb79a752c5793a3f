use crate::{
    CoreError, CoreResult, Envelope, FrameSink, MenuEntry, MenuLayout, ProjectorSettings,
    Response, TrayBackend, TrayIconKind, TrayProjector, UiExecutor,
};

use std::{
    future::Future,
    panic::Location,
    sync::{Arc, Mutex},
};

use error_location::ErrorLocation;

/// One observed backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendCall {
    SetIcon(TrayIconKind),
    SetStatusText(String),
    InstallMenu(Vec<MenuEntry>),
    Notify {
        summary: String,
        body: String,
        image: String,
    },
}

/// Backend double that records every call and can be told to fail.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub(crate) calls: Vec<BackendCall>,
    pub(crate) fail_notifications: bool,
}

impl RecordingBackend {
    pub(crate) fn icon_changes(&self) -> Vec<TrayIconKind> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetIcon(icon) => Some(*icon),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn installed_menus(&self) -> Vec<&[MenuEntry]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::InstallMenu(menu) => Some(menu.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl TrayBackend for RecordingBackend {
    fn set_icon(&mut self, icon: TrayIconKind) -> CoreResult<()> {
        self.calls.push(BackendCall::SetIcon(icon));
        Ok(())
    }

    fn set_status_text(&mut self, text: &str) -> CoreResult<()> {
        self.calls.push(BackendCall::SetStatusText(text.to_string()));
        Ok(())
    }

    fn install_menu(&mut self, entries: &[MenuEntry]) -> CoreResult<()> {
        self.calls.push(BackendCall::InstallMenu(entries.to_vec()));
        Ok(())
    }

    fn show_notification(&mut self, summary: &str, body: &str, image: &str) -> CoreResult<()> {
        if self.fail_notifications {
            return Err(CoreError::Backend {
                reason: "notification service unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.calls.push(BackendCall::Notify {
            summary: summary.to_string(),
            body: body.to_string(),
            image: image.to_string(),
        });
        Ok(())
    }
}

pub(crate) fn settings() -> ProjectorSettings {
    ProjectorSettings {
        default_image: "/res/logo48.png".to_string(),
        menu: MenuLayout::default(),
    }
}

/// Projector over a fresh recording backend, with the startup calls cleared.
#[allow(clippy::unwrap_used)]
pub(crate) fn projector() -> TrayProjector<RecordingBackend> {
    projector_with(RecordingBackend::default())
}

#[allow(clippy::unwrap_used)]
pub(crate) fn projector_with(backend: RecordingBackend) -> TrayProjector<RecordingBackend> {
    let mut projector = TrayProjector::new(backend, settings(), "Starting ...").unwrap();
    projector.backend_mut().calls.clear();
    projector
}

/// Executor that runs commands inline on the calling thread.
#[derive(Clone)]
pub(crate) struct InlineExecutor {
    pub(crate) projector: Arc<Mutex<TrayProjector<RecordingBackend>>>,
}

impl InlineExecutor {
    pub(crate) fn new() -> Self {
        Self {
            projector: Arc::new(Mutex::new(projector())),
        }
    }
}

impl UiExecutor for InlineExecutor {
    #[allow(clippy::unwrap_used)]
    fn apply(
        &self,
        envelope: Envelope,
    ) -> impl Future<Output = CoreResult<Option<Response>>> + Send {
        let result = self.projector.lock().unwrap().apply(envelope);
        async move { result }
    }
}

/// Sink that records every outbound frame.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSink {
    pub(crate) frames: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    #[allow(clippy::unwrap_used)]
    pub(crate) fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }
}

impl FrameSink for RecordingSink {
    #[allow(clippy::unwrap_used)]
    fn send_frame(&self, frame: String) -> CoreResult<()> {
        self.frames.lock().unwrap().push(frame);
        Ok(())
    }
}
