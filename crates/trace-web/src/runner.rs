use glam::Vec2;
use trace_engine::{
    events_as_floats, AssetManifest, Camera2D, EngineContext, Game, GameConfig, InputEvent,
    InputQueue,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    camera: Camera2D,
    config: GameConfig,
    initialized: bool,
    /// Flat buffer of sound event IDs for front-end reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let camera = Camera2D::new(config.world_width, config.world_height);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            camera,
            config,
            initialized: false,
            sound_buffer,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.camera = Camera2D::new(self.config.world_width, self.config.world_height);
        self.ctx = EngineContext::with_config(&self.config);
        self.game.init(&mut self.ctx);
        self.pack_sounds();
        self.initialized = true;
    }

    /// Push an input event already expressed in world coordinates.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Push a pointer event given in screen pixels, converting through the camera.
    pub fn push_pointer_down(&mut self, sx: f32, sy: f32) {
        let p = self.camera.screen_to_world(Vec2::new(sx, sy));
        self.input.push(InputEvent::PointerDown { x: p.x, y: p.y });
    }

    pub fn push_pointer_move(&mut self, sx: f32, sy: f32) {
        let p = self.camera.screen_to_world(Vec2::new(sx, sy));
        self.input.push(InputEvent::PointerMove { x: p.x, y: p.y });
    }

    pub fn push_pointer_up(&mut self, sx: f32, sy: f32) {
        let p = self.camera.screen_to_world(Vec2::new(sx, sy));
        self.input.push(InputEvent::PointerUp { x: p.x, y: p.y });
    }

    /// Resize the viewport used for screen-to-world conversion.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Parse a manifest and hand it to the game. A malformed manifest is
    /// logged and the game keeps whatever it had before.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("manifest loaded: {} sounds", manifest.sounds.len());
                self.game.load_manifest(&manifest);
            }
            Err(e) => log::error!("failed to parse asset manifest: {}", e),
        }
    }

    /// Run one frame tick: let the game consume pending input and collect
    /// the side effects it emitted.
    pub fn tick(&mut self, _dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        if !self.input.is_empty() {
            self.game.update(&mut self.ctx, &self.input);
        }

        self.input.clear();

        self.pack_sounds();
    }

    fn pack_sounds(&mut self) {
        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    /// The game being driven.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Sound events emitted during the last tick.
    pub fn sound_events(&self) -> &[u8] {
        &self.sound_buffer
    }

    /// Game events emitted during the last tick, as a flat float stream.
    pub fn game_events(&self) -> &[f32] {
        events_as_floats(&self.ctx.events)
    }

    // ---- Pointer accessors for front-end reads ----

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.game_events().as_ptr()
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
