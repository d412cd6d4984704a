use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use horde_core::{
    CardSource, FetchCache, FetchKey, FetchState, HordeAction, HordeConfig, HordeState,
    IdGenerator, UuidIds,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::Frame;
use tachyonfx::Duration;
use tracing::{debug, info};

use crate::effects::{self, FxManager};
use crate::screen::{HordeScreen, HordeView};
use crate::worker::FetchWorker;

/// Main application state
pub struct App {
    pub config: HordeConfig,
    pub state: HordeState,
    pub screen: HordeScreen,
    pub fx: FxManager,
    cache: FetchCache,
    worker: FetchWorker,
    rng: StdRng,
    ids: Box<dyn IdGenerator>,
}

impl App {
    pub fn new(config: HordeConfig, source: Arc<dyn CardSource>) -> Self {
        Self::with_parts(config, source, StdRng::from_entropy(), Box::new(UuidIds))
    }

    pub fn with_parts(
        config: HordeConfig,
        source: Arc<dyn CardSource>,
        rng: StdRng,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let mut fx = FxManager::default();
        fx.add_unique_effect("graveyard_rise", effects::graveyard_rise());

        let mut app = Self {
            state: HordeState::new(config.max_cards),
            config,
            screen: HordeScreen::new(),
            fx,
            cache: FetchCache::new(),
            worker: FetchWorker::new(source),
            rng,
            ids,
        };
        app.sync_fetches();
        app
    }

    fn zombie_key(&self) -> FetchKey {
        FetchKey::ZombieNonToken(self.state.wave)
    }

    /// Make sure the token pool and this wave's zombie have been asked for
    fn sync_fetches(&mut self) {
        let wave_key = self.zombie_key();
        let worker = &self.worker;
        self.cache
            .request(FetchKey::ZombieTokens, |key| worker.start(key));
        self.cache.request(wave_key, |key| worker.start(key));
        self.cache.forget_waves_before(self.state.wave);
    }

    pub fn tokens(&self) -> FetchState<'_> {
        self.cache.peek(FetchKey::ZombieTokens)
    }

    /// The non-token zombie for the current wave
    pub fn zombie(&self) -> FetchState<'_> {
        self.cache.peek(self.zombie_key())
    }

    pub fn tokens_loading(&self) -> bool {
        self.tokens().loading
    }

    pub fn zombie_loading(&self) -> bool {
        self.zombie().loading
    }

    /// One-line report of whatever fetch last failed
    pub fn status(&self) -> Option<String> {
        status_message(self.tokens(), self.zombie())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let status = self.status();
        let view = HordeView {
            state: &self.state,
            tokens_loading: self.tokens_loading(),
            zombie_loading: self.zombie_loading(),
            status: status.as_deref(),
            placeholder: &self.config.placeholder_image,
        };
        self.screen.render(frame, &view);

        let tick_duration = Duration::from_millis(33); // ~30fps
        self.fx
            .process_effects(tick_duration, frame.buffer_mut(), area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = {
            let view = HordeView {
                state: &self.state,
                tokens_loading: false,
                zombie_loading: false,
                status: None,
                placeholder: &self.config.placeholder_image,
            };
            self.screen.handle_key(key, &view)
        };
        self.process_action(action)
    }

    /// Handle mouse event. Returns true if should quit.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let action = {
            let view = HordeView {
                state: &self.state,
                tokens_loading: false,
                zombie_loading: false,
                status: None,
                placeholder: &self.config.placeholder_image,
            };
            self.screen.handle_mouse(mouse, &view)
        };
        self.process_action(action)
    }

    pub fn tick(&mut self) {
        for (key, outcome) in self.worker.drain() {
            self.cache.resolve(key, outcome);
        }

        self.sync_fetches();
        self.screen.clamp_cursor(self.state.len());
    }

    /// Process a screen action. Returns true if should quit.
    pub fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::Release) => self.release(),
            Some(ScreenAction::Weaken) => {
                if self.state.can_weaken() {
                    self.dispatch(HordeAction::Weaken);
                    self.fx.add_unique_effect(
                        "strength_drain",
                        effects::strength_drain().with_area(self.screen.header_area),
                    );
                } else {
                    debug!("horde has no strength left to spend");
                }
            }
            Some(ScreenAction::Remove(id)) => {
                let slot = self
                    .state
                    .entries()
                    .position(|(entry, _)| entry == id.as_str())
                    .and_then(|index| self.screen.tile_area(&self.state, index));
                self.dispatch(HordeAction::Remove(id));
                self.screen.clamp_cursor(self.state.len());
                if let Some(slot) = slot {
                    self.fx
                        .add_unique_effect("banish", effects::banish().with_area(slot));
                }
            }
            None => {}
        }

        false
    }

    fn dispatch(&mut self, action: HordeAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action, self.ids.as_mut());
    }

    fn release(&mut self) {
        if !self
            .state
            .can_release(self.tokens_loading(), self.zombie_loading())
        {
            debug!("release ignored while loading or out of strength");
            return;
        }

        let zombie_key = self.zombie_key();
        let state = std::mem::take(&mut self.state);
        let (state, added) = state.release_horde(
            &mut self.rng,
            self.ids.as_mut(),
            self.cache.peek(FetchKey::ZombieTokens).cards,
            self.cache.peek(zombie_key).cards,
            &self.config,
        );
        self.state = state;
        info!(added, wave = self.state.wave, "wave released");

        self.fx.add_unique_effect(
            "horde_arrival",
            effects::horde_arrival().with_area(self.screen.grid_area),
        );

        // New wave, new zombie.
        self.sync_fetches();
    }
}

fn status_message(tokens: FetchState<'_>, zombie: FetchState<'_>) -> Option<String> {
    if let Some(err) = tokens.error {
        return Some(format!("Could not dig up the token pool: {err}"));
    }
    zombie
        .error
        .map(|err| format!("Could not summon a zombie: {err}"))
}

/// Actions that the screen can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    Release,
    Weaken,
    Remove(String),
}
