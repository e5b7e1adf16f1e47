pub mod api;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{SoundEvent, GameEvent, events_as_floats};
pub use renderer::camera::Camera2D;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, SoundDescriptor};
