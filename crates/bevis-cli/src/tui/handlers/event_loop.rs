//! Event loop
//!
//! A single cooperative timeline: every tick advances the sequencer and
//! redraws; terminal events are drained in between. The trigger key
//! returns immediately and the visuals catch up on the next tick.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

use crate::tui::app::App;
use crate::tui::rendering;

impl App {
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(Duration::from_millis(self.config.tick_rate_ms));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.on_tick() {
                        // Config just landed; adopt its frame interval
                        ticker = tokio::time::interval(
                            Duration::from_millis(self.config.tick_rate_ms),
                        );
                    }
                    terminal.draw(|f| rendering::render(f, self))?;
                }
                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key) = event {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key);
                        }
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
