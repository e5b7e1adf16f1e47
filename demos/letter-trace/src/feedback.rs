//! Side-effect sinks the tracing state machine writes into.
//!
//! The state machine never renders or plays anything itself. It reports what
//! should be seen and heard through these traits; the game wires them to the
//! engine outbox (`presenter::EnginePresenter`), tests wire them to a recorder.

use glam::Vec2;
use serde::Deserialize;
use trace_engine::SoundEvent;

/// Linear RGBA color, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const CLEAR: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// RGB packed as 0xRRGGBB, exactly representable in an f32 event slot.
    pub fn packed_rgb(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Where sounds go.
pub trait AudioSink {
    fn play_one_shot(&mut self, clip: SoundEvent);
    fn play_at(&mut self, clip: SoundEvent, position: Vec2);
}

/// Where stroke visuals go.
pub trait StrokeVisuals {
    fn set_fill(&mut self, stroke: usize, color: Rgba);
    fn set_indicator_visible(&mut self, visible: bool);
    fn set_indicator_position(&mut self, position: Vec2);
    fn set_waypoint_visible(&mut self, stroke: usize, waypoint: usize, visible: bool);
}

/// The win panel.
pub trait WinSurface {
    fn set_visible(&mut self, visible: bool);
}

/// Everything a letter scene can drive.
pub trait Presenter: AudioSink + StrokeVisuals + WinSurface {}

impl<T: AudioSink + StrokeVisuals + WinSurface> Presenter for T {}

/// Play an optional clip. A missing clip is silent.
pub fn play_one_shot(out: &mut dyn Presenter, clip: Option<SoundEvent>) {
    if let Some(clip) = clip {
        out.play_one_shot(clip);
    }
}

/// Play an optional clip at a position. A missing clip is silent.
pub fn play_at(out: &mut dyn Presenter, clip: Option<SoundEvent>, position: Vec2) {
    if let Some(clip) = clip {
        out.play_at(clip, position);
    }
}
