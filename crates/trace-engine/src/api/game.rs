use crate::api::types::{GameEvent, SoundEvent};
use crate::assets::manifest::AssetManifest;
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Expected sound events per frame, used to pre-size the outbox (default: 32).
    pub max_sounds: usize,
    /// Expected game events per frame, used to pre-size the outbox (default: 64).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            max_sounds: 32,
            max_events: 64,
        }
    }
}

/// The core contract every game must fulfill.
///
/// Everything is driven synchronously: `update` sees the input that arrived
/// since the previous tick and writes its side effects into the context outbox.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle the pending input events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Called when the front-end delivers a new asset manifest.
    fn load_manifest(&mut self, _manifest: &AssetManifest) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
/// Holds the per-frame outbox the front-end drains after each tick.
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context whose outbox is pre-sized from the game's config.
    /// The sizes are hints; a busy frame grows past them.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
        }
    }

    /// Emit a sound event to be forwarded to the front-end.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the front-end.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
