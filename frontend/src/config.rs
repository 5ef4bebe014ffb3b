//! Application configuration domain.
//!
//! The persisted dashboard configuration (theme, aggregate API origin) is
//! loaded from the backend before any view is built and saved back whenever
//! the theme is toggled. The API origin is fixed for the page session.

use crate::connection::ConnectionAdapter;
use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select};
use shared::{DashboardConfig, DownMsg, Theme, UpMsg};
use std::sync::Arc;
use zoon::*;

#[derive(Clone)]
pub struct AppConfig {
    pub theme_actor: Actor<Theme>,
    pub theme_toggled_relay: Relay<()>,
    pub api_base: String,
    /// Kept alive for the whole session; saving goes through it.
    pub connection: Arc<ConnectionAdapter>,
}

impl AppConfig {
    /// Load the persisted configuration. Falls back to defaults when the
    /// backend reports an error, so a missing config file never blocks the
    /// dashboard.
    pub async fn new() -> Self {
        let (connection, mut down_msg_stream) = ConnectionAdapter::new();
        let connection = Arc::new(connection);

        connection.send_up_msg(UpMsg::LoadConfig).await;

        let mut config = DashboardConfig::default();
        while let Some(down_msg) = down_msg_stream.next().await {
            match down_msg {
                DownMsg::ConfigLoaded(loaded) => {
                    config = loaded;
                    break;
                }
                DownMsg::ConfigError(error) => {
                    zoon::eprintln!("Config load failed, using defaults: {}", error);
                    break;
                }
                DownMsg::ConfigSaved => {}
            }
        }
        for warning in config.validate_and_fix() {
            zoon::println!("Config normalized: {}", warning);
        }

        let initial_theme = config.theme;
        let api_base = config.api_base.clone();
        let (theme_toggled_relay, mut theme_toggled_stream) = relay::<()>();

        let theme_actor = Actor::new(initial_theme, {
            let connection = connection.clone();
            let api_base = api_base.clone();
            async move |state| {
                // Cache Current Values pattern - the latest theme lives in
                // the processor, never read back from the Mutable.
                let mut current_theme = initial_theme;
                loop {
                    select! {
                        toggled = theme_toggled_stream.next() => {
                            let Some(()) = toggled else { break };
                            current_theme = match current_theme {
                                Theme::Light => Theme::Dark,
                                Theme::Dark => Theme::Light,
                            };
                            state.set_neq(current_theme);
                            connection
                                .send_up_msg(UpMsg::SaveConfig(DashboardConfig {
                                    theme: current_theme,
                                    api_base: api_base.clone(),
                                }))
                                .await;
                        }
                        down_msg = down_msg_stream.next() => {
                            let Some(down_msg) = down_msg else { break };
                            match down_msg {
                                DownMsg::ConfigSaved => {}
                                DownMsg::ConfigError(error) => {
                                    zoon::eprintln!("Config save failed: {}", error);
                                }
                                DownMsg::ConfigLoaded(_) => {}
                            }
                        }
                    }
                }
            }
        });

        AppConfig {
            theme_actor,
            theme_toggled_relay,
            api_base,
            connection,
        }
    }

    pub fn theme_signal(&self) -> impl Signal<Item = Theme> + use<> {
        self.theme_actor.signal()
    }
}
