//! Syncany Tray: system tray helper driven by the Syncany daemon over a local websocket.

mod cli;
mod config;
mod error;
mod link;
mod logging;
mod tray_assets;
mod tray_manager;
mod ui_event;
mod ui_handle;

pub(crate) use {
    cli::Cli,
    error::{AppError, Result as AppResult},
    link::OutboundLink,
    tray_assets::TrayAssets,
    tray_manager::TrayManager,
    ui_event::UiEvent,
    ui_handle::UiHandle,
};

use crate::config::{Config, DEFAULT_LOG_FILTER};

use std::panic::Location;

use clap::Parser;
use error_location::ErrorLocation;
use syncany_tray_core::{
    CoreError, Dispatcher, EventEmitter, MenuLayout, ProjectorSettings, TrayProjector, event_queue,
};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info, warn};
use tray_icon::menu::MenuEvent;

/// Tray state living on the main thread once the event loop has started.
struct UiState {
    projector: TrayProjector<TrayManager>,
    emitter: EventEmitter<OutboundLink>,
}

/// Log the reason and end the process immediately, without cleanup.
///
/// The daemon supervises the helper and restarts it, so there is nothing
/// to salvage after a transport failure.
fn terminate(reason: &str) -> ! {
    error!(reason = %reason, "Terminating tray helper");
    std::process::exit(1);
}

/// Application entry point.
fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            logging::init(DEFAULT_LOG_FILTER, false);
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging.filter, config.logging.json);

    info!(
        resource_dir = ?cli.resource_dir,
        status_text = %cli.status_text,
        "Syncany tray starting"
    );

    let event_loop = EventLoopBuilder::<UiEvent>::with_user_event().build();
    let ui_proxy = event_loop.create_proxy();

    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if menu_proxy.send_event(UiEvent::Menu(event)).is_err() {
            warn!("Menu event dropped, UI event loop has exited");
        }
    }));

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut ui_state: Option<UiState> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(UiEvent::Apply { envelope, reply }) => {
                let result = match ui_state.as_mut() {
                    Some(state) => state.projector.apply(envelope),
                    None => Err(CoreError::Handoff {
                        reason: "Tray not initialized yet".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }),
                };

                if let Err(e) = &result {
                    error!(error = ?e, "Failed to apply command");
                }

                if reply.send(result).is_err() {
                    warn!("Dispatcher dropped before receiving the result");
                }
            }
            Event::UserEvent(UiEvent::Menu(menu_event)) => {
                if let Some(state) = ui_state.as_ref() {
                    if let Err(e) = state.emitter.emit_for_id(&menu_event.id.0) {
                        terminate(&format!("Failed to emit menu event: {}", e));
                    }
                }
            }
            Event::NewEvents(StartCause::Init) => {
                let assets = TrayAssets::new(&cli.resource_dir, &config.icons);
                let settings = ProjectorSettings {
                    default_image: assets.notification_image().to_string_lossy().into_owned(),
                    menu: MenuLayout {
                        show_new_folder: config.menu.show_new_folder,
                    },
                };

                let tray_manager =
                    match TrayManager::new(assets, config.notifications.app_name.clone()) {
                        Ok(tm) => tm,
                        Err(e) => {
                            error!("Failed to create TrayManager: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                let projector = match TrayProjector::new(tray_manager, settings, &cli.status_text)
                {
                    Ok(p) => p,
                    Err(e) => {
                        error!("Failed to initialize tray state: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let (queue, listener) = event_queue(config.events.queue_capacity);
                let (outbound, outbound_rx) = link::outbound_channel();

                ui_state = Some(UiState {
                    projector,
                    emitter: EventEmitter::new(outbound.clone(), queue),
                });

                let dispatcher = Dispatcher::new(UiHandle::new(ui_proxy.clone()), listener);
                let endpoint = config.endpoint.clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => terminate(&format!("Failed to create tokio runtime: {}", e)),
                    };

                    match rt.block_on(link::run(&endpoint, dispatcher, outbound, outbound_rx)) {
                        Ok(()) => terminate("Connection closed by daemon"),
                        Err(e) => terminate(&format!("Transport failure: {}", e)),
                    }
                });
            }
            _ => {}
        }
    });
}
