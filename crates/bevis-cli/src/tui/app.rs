//! Application state
//!
//! One instance owns everything the screen needs: the static profile,
//! the theme, the Kontroll sequencer, popup visibility, and the
//! readiness gate that holds rendering back until the background
//! config load lands.

use std::time::Instant;

use bevis_core::config::ConfigError;
use bevis_core::{BevisConfig, KontrollSequencer, StaticProfile};
use tokio::sync::mpsc;

use crate::tui::popups::Popups;
use crate::tui::themes::Theme;

type ConfigResult = Result<BevisConfig, ConfigError>;

/// Channels for background work feeding the UI.
#[derive(Default)]
pub struct Channels {
    pub config: Option<mpsc::UnboundedReceiver<ConfigResult>>,
}

pub struct App {
    pub profile: StaticProfile,
    pub theme: Theme,
    pub config: BevisConfig,
    pub sequencer: KontrollSequencer,
    pub popups: Popups,
    /// Gate opened by the config load; nothing but the loading
    /// placeholder renders while closed.
    pub ready: bool,
    pub should_quit: bool,
    pub channels: Channels,
}

impl App {
    pub fn new() -> Self {
        Self {
            profile: StaticProfile::new(),
            theme: Theme::default_theme(),
            config: BevisConfig::default(),
            sequencer: KontrollSequencer::new(),
            popups: Popups::default(),
            ready: false,
            should_quit: false,
            channels: Channels::default(),
        }
    }

    /// Kick off the background config load that opens the readiness gate.
    pub fn start_config_load(&mut self) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.channels.config = Some(rx);
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(BevisConfig::load());
        });
    }

    /// Poll the config channel. Returns true when the gate opened (or the
    /// config changed) this tick.
    pub fn poll_config(&mut self) -> bool {
        let Some(rx) = self.channels.config.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.channels.config = None;
                match result {
                    Ok(config) => {
                        match Theme::by_name(&config.theme) {
                            Some(theme) => {
                                tracing::info!(theme = %theme.display_name, "theme applied");
                                self.theme = theme;
                            }
                            None => tracing::warn!(
                                theme = %config.theme,
                                "unknown theme, keeping default"
                            ),
                        }
                        self.config = config;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "config load failed, using defaults");
                    }
                }
                self.ready = true;
                true
            }
            Err(mpsc::error::TryRecvError::Empty) => false,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                // Loader died without reporting; open the gate with
                // defaults rather than hang on the placeholder
                self.channels.config = None;
                self.ready = true;
                true
            }
        }
    }

    /// Per-frame work: drain background channels, advance the sequencer.
    /// Returns true when the config (and thus the tick rate) changed.
    pub fn on_tick(&mut self) -> bool {
        let config_changed = self.poll_config();
        self.sequencer.tick(Instant::now());
        config_changed
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
