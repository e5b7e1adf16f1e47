use glam::Vec2;
use trace_engine::{EngineContext, GameEvent, SoundEvent};

use crate::feedback::{AudioSink, Rgba, StrokeVisuals, WinSurface};

// Game event kinds (Rust → front-end)
pub const EVENT_SCENE_LOADED: f32 = 1.0;
pub const EVENT_STROKE_FILL: f32 = 2.0;
pub const EVENT_INDICATOR_VISIBLE: f32 = 3.0;
pub const EVENT_INDICATOR_POSITION: f32 = 4.0;
pub const EVENT_WAYPOINT_VISIBLE: f32 = 5.0;
pub const EVENT_WIN_VISIBLE: f32 = 6.0;
pub const EVENT_STROKE_COMPLETED: f32 = 7.0;
pub const EVENT_LETTER_COMPLETED: f32 = 8.0;
pub const EVENT_TRACE_RESET: f32 = 9.0;

fn flag(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

/// Writes sink calls into the engine outbox for the front-end to render.
pub struct EnginePresenter<'a> {
    ctx: &'a mut EngineContext,
}

impl<'a> EnginePresenter<'a> {
    pub fn new(ctx: &'a mut EngineContext) -> Self {
        Self { ctx }
    }

    fn event(&mut self, kind: f32, a: f32, b: f32, c: f32) {
        self.ctx.emit_event(GameEvent::new(kind, a, b, c));
    }

    pub fn scene_loaded(&mut self, code: u32) {
        self.event(EVENT_SCENE_LOADED, code as f32, 0.0, 0.0);
    }

    pub fn stroke_completed(&mut self, stroke: usize) {
        self.event(EVENT_STROKE_COMPLETED, stroke as f32, 0.0, 0.0);
    }

    pub fn letter_completed(&mut self, code: u32) {
        self.event(EVENT_LETTER_COMPLETED, code as f32, 0.0, 0.0);
    }

    pub fn trace_reset(&mut self, stroke: usize) {
        self.event(EVENT_TRACE_RESET, stroke as f32, 0.0, 0.0);
    }
}

impl AudioSink for EnginePresenter<'_> {
    fn play_one_shot(&mut self, clip: SoundEvent) {
        self.ctx.emit_sound(clip);
    }

    // The front-end mixes in stereo only; position is not forwarded.
    fn play_at(&mut self, clip: SoundEvent, _position: Vec2) {
        self.ctx.emit_sound(clip);
    }
}

impl StrokeVisuals for EnginePresenter<'_> {
    fn set_fill(&mut self, stroke: usize, color: Rgba) {
        self.event(EVENT_STROKE_FILL, stroke as f32, color.packed_rgb() as f32, color.a);
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        self.event(EVENT_INDICATOR_VISIBLE, flag(visible), 0.0, 0.0);
    }

    fn set_indicator_position(&mut self, position: Vec2) {
        self.event(EVENT_INDICATOR_POSITION, position.x, position.y, 0.0);
    }

    fn set_waypoint_visible(&mut self, stroke: usize, waypoint: usize, visible: bool) {
        self.event(EVENT_WAYPOINT_VISIBLE, stroke as f32, waypoint as f32, flag(visible));
    }
}

impl WinSurface for EnginePresenter<'_> {
    fn set_visible(&mut self, visible: bool) {
        self.event(EVENT_WIN_VISIBLE, flag(visible), 0.0, 0.0);
    }
}
