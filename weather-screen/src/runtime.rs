//! Event/action/render loop
//!
//! Terminal events are polled on a background task and mapped to actions by
//! the root component. Those actions are dispatched before the next event is
//! read, so every keystroke is handled against the state the previous one
//! produced. Actions from finished tasks go through the same screen, and a
//! frame is drawn whenever something changed.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tui_dispatch::{process_raw_event, spawn_event_poller, LoggingMiddleware, Middleware, RawEvent};
use weather_api::WeatherApi;

use crate::action::Action;
use crate::components::{Component, WeatherScreen, WeatherScreenProps};
use crate::screen::Screen;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);

pub struct Runtime<C: WeatherApi, M: Middleware<Action> = LoggingMiddleware> {
    screen: Screen<C, M>,
    ui: WeatherScreen,
    should_render: bool,
}

impl<C: WeatherApi, M: Middleware<Action>> Runtime<C, M> {
    pub fn new(screen: Screen<C, M>) -> Self {
        Self {
            screen,
            ui: WeatherScreen::new(),
            should_render: true,
        }
    }

    pub fn screen(&self) -> &Screen<C, M> {
        &self.screen
    }

    /// Run against the real terminal input until `Quit`
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());

        let result = self.run_with_events(terminal, event_rx).await;
        cancel_token.cancel();
        result
    }

    /// Run with events from `event_rx` instead of the terminal
    pub async fn run_with_events<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut event_rx: mpsc::UnboundedReceiver<RawEvent>,
    ) -> io::Result<()> {
        let size = terminal.size()?;
        self.screen
            .dispatch(Action::UiTerminalResize(size.width, size.height));

        'main: loop {
            let today = chrono::Local::now().date_naive();

            if self.should_render {
                let state = self.screen.state();
                terminal.draw(|frame| {
                    self.ui
                        .render(frame, frame.area(), WeatherScreenProps { state, today });
                })?;
                self.should_render = false;
            }

            tokio::select! {
                biased;

                Some(action) = self.screen.next_action() => {
                    if action == Action::Quit {
                        break 'main;
                    }
                    self.should_render |= self.screen.dispatch(action);
                }

                Some(raw) = event_rx.recv() => {
                    let event = process_raw_event(raw);
                    let actions: Vec<Action> = self
                        .ui
                        .handle_event(&event, WeatherScreenProps { state: self.screen.state(), today })
                        .into_iter()
                        .collect();
                    for action in actions {
                        if action == Action::Quit {
                            break 'main;
                        }
                        self.screen.dispatch(action);
                    }
                    // Cursor moves change nothing in the store but still need a frame
                    self.should_render = true;
                }

                else => {
                    debug!("Event and action channels closed");
                    break;
                }
            }
        }

        self.screen.shutdown();
        Ok(())
    }
}
