use glam::Vec2;
use trace_engine::*;

use crate::error::ConfigError;
use crate::feedback::{Presenter, StrokeVisuals, WinSurface};
use crate::letter::{LetterProgress, LetterResult};
use crate::letters::LetterLibrary;
use crate::presenter::EnginePresenter;
use crate::scenes::{Scene, SceneLoader};
use crate::session::GameSession;
use crate::sounds::SoundClips;
use crate::stroke::TraceResult;

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 600.0;

// Custom event kinds (UI → Rust)
pub const CUSTOM_LOAD_SCENE: u32 = 1;

/// The letter tracing game: a home screen and one scene per letter.
pub struct LetterTrace {
    library: LetterLibrary,
    clips: SoundClips,
    scenes: SceneLoader,
    letter: Option<LetterProgress>,
    session: GameSession,
}

impl LetterTrace {
    pub fn new() -> Self {
        let library = LetterLibrary::builtin().unwrap_or_else(|e| {
            log::error!("failed to load built-in letters: {}", e);
            LetterLibrary::empty()
        });
        Self::with_library(library)
    }

    pub fn with_library(library: LetterLibrary) -> Self {
        let clips = SoundClips::default();
        let session = GameSession::new(library.session_config(&clips));
        Self {
            library,
            clips,
            scenes: SceneLoader::new(),
            letter: None,
            session,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scenes.current()
    }

    /// The letter being traced, if the current scene has one.
    pub fn letter(&self) -> Option<&LetterProgress> {
        self.letter.as_ref()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn clips(&self) -> &SoundClips {
        &self.clips
    }

    /// Tear down the current scene and set up `scene`.
    pub fn load_scene(&mut self, scene: Scene, ctx: &mut EngineContext) {
        let previous = self.scenes.load(scene);
        log::debug!("left scene '{}'", previous);
        let mut out = EnginePresenter::new(ctx);

        self.letter = match scene {
            Scene::Home => None,
            Scene::Letter(ch) => {
                let built = self.library.build(ch, &self.clips);
                if built.is_none() {
                    log::error!("{}", ConfigError::UnknownLetter(ch));
                }
                built
            }
        };

        out.set_indicator_visible(false);
        if let Some(letter) = self.letter.as_mut() {
            letter.initialize(&mut out);
        }

        self.session = GameSession::new(self.library.session_config(&self.clips));
        match scene {
            Scene::Home => out.set_visible(false),
            Scene::Letter(_) => {
                if let Err(e) = self.session.initialize(self.letter.as_ref(), &mut out) {
                    log::error!("game session: {}", e);
                }
            }
        }

        out.scene_loaded(scene.code());
    }

    /// Feed one pointer event to the letter and report what happened.
    fn on_pointer(
        &mut self,
        ctx: &mut EngineContext,
        f: impl FnOnce(&mut LetterProgress, &mut dyn Presenter) -> LetterResult,
    ) {
        let Some(letter) = self.letter.as_mut() else {
            return;
        };
        let mut out = EnginePresenter::new(ctx);
        let active = letter.active_index();

        match f(letter, &mut out) {
            LetterResult::Stroke(TraceResult::Reset) => out.trace_reset(active),
            LetterResult::StrokeComplete { completed, .. } => out.stroke_completed(completed),
            LetterResult::LetterComplete => {
                out.stroke_completed(active);
                out.letter_completed(self.scenes.current().code());
                self.session.on_letter_completed(letter.name(), &mut out);
            }
            LetterResult::Stroke(_) | LetterResult::Ignored => {}
        }
    }
}

impl Default for LetterTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for LetterTrace {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        log::info!(
            "LetterTrace initialized with letters {:?}",
            self.library.letters().collect::<String>()
        );
        self.load_scene(Scene::Home, ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.on_pointer(ctx, |l, out| l.pointer_down(Vec2::new(x, y), out))
                }
                InputEvent::PointerMove { x, y } => {
                    self.on_pointer(ctx, |l, out| l.pointer_move(Vec2::new(x, y), out))
                }
                InputEvent::PointerUp { .. } => self.on_pointer(ctx, |l, out| l.pointer_up(out)),
                InputEvent::PointerCancel => {
                    self.on_pointer(ctx, |l, out| l.pointer_cancel(out))
                }
                InputEvent::Custom { kind: CUSTOM_LOAD_SCENE, a, .. } => {
                    match Scene::from_code(a as u32) {
                        Some(scene) => self.load_scene(scene, ctx),
                        None => log::warn!("ignoring load of unknown scene code {}", a),
                    }
                }
                InputEvent::Custom { kind, .. } => {
                    log::debug!("unhandled custom event kind {}", kind);
                }
            }
        }
    }

    fn load_manifest(&mut self, manifest: &AssetManifest) {
        self.clips = SoundClips::from_manifest(self.library.clip_names(), manifest);
        log::info!("sound clips resolved: {:?}", self.clips);
    }
}
