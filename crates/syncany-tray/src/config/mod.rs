#[allow(clippy::module_inception)]
mod config;
mod endpoint_config;
mod events_config;
mod icons_config;
mod logging_config;
mod menu_config;
mod notifications_config;

pub(crate) use {
    config::Config, endpoint_config::EndpointConfig, events_config::EventsConfig,
    icons_config::IconsConfig, logging_config::LoggingConfig, menu_config::MenuConfig,
    notifications_config::NotificationsConfig,
};

pub(crate) const DEFAULT_HOST: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: u16 = 8887;
pub(crate) const DEFAULT_CLIENT_ID: &str = "appindicator-tray";
pub(crate) const DEFAULT_QUEUE_CAPACITY: usize = 64;
pub(crate) const DEFAULT_APP_NAME: &str = "Syncany";
pub(crate) const DEFAULT_LOG_FILTER: &str = "syncany_tray=info,syncany_tray_core=info";

pub(crate) fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}

pub(crate) fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

pub(crate) fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

pub(crate) fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
