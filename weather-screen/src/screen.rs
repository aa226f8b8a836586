//! Screen controller: effect store + effect handling + task management
//!
//! Actions come in through an unbounded channel (from input, from finished
//! tasks, or from [`Screen::enqueue`]). Each one is run through the store and
//! the effects it declares are turned into tasks.
//!
//! The search debounce timer is a keyed [`TaskManager`] task, so a new
//! keystroke replaces the pending timer. Requests are never replaced: every
//! geocode and every weather fetch runs to completion and the result that
//! arrives last is the one the screen shows.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info};
use tui_dispatch::{ActionSummary, EffectStoreWithMiddleware, LoggingMiddleware, Middleware, TaskManager};
use weather_api::WeatherApi;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::reducer;
use crate::state::{AppState, SEARCH_DEBOUNCE};

/// Key of the one debounce timer the search input uses
pub const SEARCH_TASK: &str = "location_search";

pub struct Screen<C: WeatherApi, M: Middleware<Action> = LoggingMiddleware> {
    store: EffectStoreWithMiddleware<AppState, Action, Effect, M>,
    tasks: TaskManager<Action>,
    requests: JoinSet<()>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    api: Arc<C>,
}

impl<C: WeatherApi> Screen<C, LoggingMiddleware> {
    pub fn new(state: AppState, api: C) -> Self {
        Self::with_middleware(state, api, LoggingMiddleware::new())
    }
}

impl<C: WeatherApi, M: Middleware<Action>> Screen<C, M> {
    pub fn with_middleware(state: AppState, api: C, middleware: M) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: EffectStoreWithMiddleware::new(state, reducer, middleware),
            tasks: TaskManager::new(action_tx.clone()),
            requests: JoinSet::new(),
            action_tx,
            action_rx,
            api: Arc::new(api),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn tasks(&self) -> &TaskManager<Action> {
        &self.tasks
    }

    /// Requests spawned and not yet finished
    pub fn requests_in_flight(&mut self) -> usize {
        self.reap_requests();
        self.requests.len()
    }

    /// Initial load: fetch weather for the starting location
    pub fn mount(&mut self) {
        let state = self.store.state();
        info!(
            location = %state.location.display_name(),
            units = %state.units,
            "Mounting weather screen"
        );
        self.dispatch(Action::WeatherFetch);
    }

    /// Queue an action to be dispatched by the next loop iteration
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    /// Dispatch immediately and start any effects. Returns whether state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.handle_effect(effect);
        }
        result.changed
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::DebounceSearch { query } => {
                self.tasks.debounce(SEARCH_TASK, SEARCH_DEBOUNCE, async move {
                    Action::SearchQuerySettle(query)
                });
            }
            Effect::ResolveLocations { query, limit } => {
                debug!(%query, limit, "Resolving locations");
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    Action::SearchDidLoad(api.resolve_locations(&query, limit).await)
                });
            }
            Effect::FetchWeather(query) => {
                debug!(lat = %query.lat, lon = %query.lon, units = %query.units, "Fetching weather");
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    Action::WeatherDidLoad(
                        api.fetch_weather(&query.lat, &query.lon, query.units).await,
                    )
                });
            }
        }
    }

    fn spawn_request<F>(&mut self, future: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.reap_requests();
        let tx = self.action_tx.clone();
        self.requests.spawn(async move {
            let action = future.await;
            debug!(action = %action.summary(), "Request finished");
            let _ = tx.send(action);
        });
    }

    fn reap_requests(&mut self) {
        while self.requests.try_join_next().is_some() {}
    }

    /// Wait for the next action. `None` once every sender is gone, which
    /// cannot happen while the screen holds its own sender.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Dispatch everything already queued without waiting.
    /// Returns whether any of it changed state.
    pub fn process_pending(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.action_rx.try_recv() {
            changed |= self.dispatch(action);
        }
        changed
    }

    /// Abort the debounce timer and all in-flight requests
    pub fn shutdown(&mut self) {
        info!(
            timers = self.tasks.len(),
            requests = self.requests.len(),
            "Shutting down weather screen"
        );
        self.tasks.cancel_all();
        self.requests.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tui_dispatch::{NoopMiddleware, TaskKey};
    use weather_api::{Location, UnitSystem, WeatherSnapshot};

    struct Offline;

    impl WeatherApi for Offline {
        async fn resolve_locations(&self, _query: &str, _limit: u32) -> Option<Vec<Location>> {
            None
        }

        async fn fetch_weather(
            &self,
            _lat: &str,
            _lon: &str,
            _units: UnitSystem,
        ) -> Option<WeatherSnapshot> {
            tokio::time::sleep(Duration::from_millis(100)).await;
            None
        }
    }

    fn screen() -> Screen<Offline, NoopMiddleware> {
        Screen::with_middleware(AppState::default(), Offline, NoopMiddleware)
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_change_arms_debounce_timer() {
        let mut screen = screen();

        screen.dispatch(Action::SearchToggle);
        screen.dispatch(Action::SearchQueryChange("Lvi".into()));

        assert!(screen.tasks().is_running(&TaskKey::new(SEARCH_TASK)));
        assert_eq!(screen.state().search_query, "Lvi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_enqueued_actions_wait_for_processing() {
        let mut screen = screen();

        screen.enqueue(Action::SearchToggle);
        assert!(!screen.state().search_active);

        assert!(screen.process_pending());
        assert!(screen.state().search_active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_is_delivered_as_action() {
        let mut screen = screen();
        screen.mount();

        let action = tokio::time::timeout(Duration::from_secs(1), screen.next_action())
            .await
            .expect("timeout");
        assert_eq!(action, Some(Action::WeatherDidLoad(None)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_fetches_all_run() {
        let mut screen = screen();

        screen.dispatch(Action::WeatherFetch);
        screen.dispatch(Action::UiToggleUnits);
        assert_eq!(screen.requests_in_flight(), 2);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(screen.process_pending());
        assert!(screen.state().weather.is_none());
        assert_eq!(screen.requests_in_flight(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_timer_and_requests() {
        let mut screen = screen();
        screen.dispatch(Action::SearchQueryChange("Odesa".into()));
        screen.mount();
        screen.shutdown();

        assert!(screen.tasks().is_empty());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(screen.requests_in_flight(), 0);
        assert!(screen.action_rx.try_recv().is_err(), "nothing was delivered");
    }
}
