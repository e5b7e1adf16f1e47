use glam::Vec2;
use trace_engine::SoundEvent;

use crate::feedback::{self, Presenter, Rgba};
use crate::region::Region;
use crate::waypoint::Waypoint;

/// Solid fill of a finished stroke.
pub const DEFAULT_COMPLETED_COLOR: Rgba = Rgba::new(0.4, 0.25, 0.7, 1.0);
/// Translucent fill showing where to trace.
pub const DEFAULT_GUIDE_COLOR: Rgba = Rgba::new(0.4, 0.25, 0.7, 0.4);
/// Default pickup distance for waypoints, in world units.
pub const DEFAULT_THRESHOLD: f32 = 40.0;

/// Lifecycle of a single stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// Not this stroke's turn yet.
    Inactive,
    /// Showing the guide, waiting for the pointer.
    Guiding,
    /// Pointer is down and following the waypoints.
    Tracing,
    /// All waypoints reached.
    Completed,
}

/// Result of feeding one pointer event to a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceResult {
    /// Event had no effect on progress.
    Ignored,
    /// Tracing began.
    Started,
    /// Pointer moved but did not reach the next waypoint.
    Moved,
    /// Pointer reached the next waypoint.
    Advanced,
    /// The attempt failed and progress went back to the first waypoint.
    Reset,
    /// The stroke was completed. Reported once per activation.
    StrokeComplete,
}

/// Colors and clips for one stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub completed_color: Rgba,
    pub guide_color: Rgba,
    pub completed_sound: Option<SoundEvent>,
    pub reset_sound: Option<SoundEvent>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            completed_color: DEFAULT_COMPLETED_COLOR,
            guide_color: DEFAULT_GUIDE_COLOR,
            completed_sound: None,
            reset_sound: None,
        }
    }
}

/// Tracks pointer progress along the ordered waypoints of one stroke.
///
/// The pointer has to come within `threshold` of the waypoints one at a time,
/// in order. Lifting the pointer or leaving the stroke's region before the
/// last waypoint sends progress back to the start.
#[derive(Debug, Clone)]
pub struct TraceStroke {
    index: usize,
    name: String,
    waypoints: Vec<Waypoint>,
    current_index: usize,
    state: StrokeState,
    enabled: bool,
    threshold: f32,
    region: Region,
    style: StrokeStyle,
    /// Last pointer position seen, where feedback sounds are played.
    pointer: Vec2,
}

impl TraceStroke {
    /// Create a stroke through `points` in world coordinates.
    pub fn new(name: impl Into<String>, points: Vec<Vec2>, threshold: f32) -> Self {
        Self {
            index: 0,
            name: name.into(),
            waypoints: points.into_iter().map(Waypoint::new).collect(),
            current_index: 0,
            state: StrokeState::Inactive,
            enabled: false,
            threshold,
            region: Region::Unbounded,
            style: StrokeStyle::default(),
            pointer: Vec2::ZERO,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Position of this stroke within its letter; used to address visuals.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_tracing(&self) -> bool {
        self.state == StrokeState::Tracing
    }

    pub fn is_completed(&self) -> bool {
        self.state == StrokeState::Completed
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Index of the next waypoint to reach.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Fraction of waypoints reached (0.0 to 1.0). An empty stroke reports 0.
    pub fn progress(&self) -> f32 {
        if self.waypoints.is_empty() {
            return 0.0;
        }
        self.current_index as f32 / self.waypoints.len() as f32
    }

    /// Whether `pos` lies inside the stroke's interactive region.
    pub fn contains(&self, pos: Vec2) -> bool {
        self.region.contains(pos)
    }

    /// Put the stroke in its freshly loaded state: input off, nothing shown.
    pub fn prepare(&mut self, out: &mut dyn Presenter) {
        self.state = StrokeState::Inactive;
        self.enabled = false;
        self.current_index = 0;
        for (i, waypoint) in self.waypoints.iter_mut().enumerate() {
            waypoint.deactivate();
            out.set_waypoint_visible(self.index, i, false);
        }
        out.set_fill(self.index, Rgba::CLEAR);
        out.set_indicator_visible(false);
    }

    /// Make this the stroke to trace: progress cleared, guide shown.
    pub fn activate(&mut self, out: &mut dyn Presenter) {
        self.current_index = 0;
        self.state = StrokeState::Guiding;
        out.set_fill(self.index, self.style.guide_color);
        log::info!("stroke '{}' activated", self.name);
    }

    /// Pointer pressed on this stroke.
    pub fn begin_input(&mut self, pos: Vec2, out: &mut dyn Presenter) -> TraceResult {
        if !self.enabled {
            return TraceResult::Ignored;
        }
        match self.state {
            StrokeState::Guiding | StrokeState::Tracing => {
                self.state = StrokeState::Tracing;
                self.pointer = pos;
                out.set_indicator_position(pos);
                out.set_indicator_visible(true);
                TraceResult::Started
            }
            StrokeState::Inactive | StrokeState::Completed => TraceResult::Ignored,
        }
    }

    /// Pointer dragged while pressed.
    pub fn update_input(&mut self, pos: Vec2, out: &mut dyn Presenter) -> TraceResult {
        if self.state != StrokeState::Tracing {
            return TraceResult::Ignored;
        }
        self.pointer = pos;
        out.set_indicator_position(pos);

        let mut advanced = false;
        if let Some(target) = self.waypoints.get(self.current_index) {
            if pos.distance(target.position) < self.threshold {
                self.current_index += 1;
                advanced = true;
                log::debug!(
                    "stroke '{}' reached waypoint {}/{}",
                    self.name,
                    self.current_index,
                    self.waypoints.len()
                );
                self.reveal_passed_waypoint(out);
            }
        }

        let fill = self.style.completed_color.with_alpha(self.progress());
        out.set_fill(self.index, fill);

        if self.current_index >= self.waypoints.len() {
            return self.complete_trace(out);
        }
        if advanced {
            TraceResult::Advanced
        } else {
            TraceResult::Moved
        }
    }

    /// Pointer released.
    pub fn end_input(&mut self, out: &mut dyn Presenter) -> TraceResult {
        let result = if self.state == StrokeState::Tracing {
            self.reset_trace(out);
            self.state = StrokeState::Guiding;
            TraceResult::Reset
        } else {
            TraceResult::Ignored
        };
        out.set_indicator_visible(false);
        result
    }

    /// Pointer left the stroke's region.
    pub fn exit_region(&mut self, out: &mut dyn Presenter) -> TraceResult {
        if self.state != StrokeState::Tracing {
            return TraceResult::Ignored;
        }
        self.reset_trace(out);
        self.state = StrokeState::Guiding;
        out.set_indicator_visible(false);
        TraceResult::Reset
    }

    fn reset_trace(&mut self, out: &mut dyn Presenter) {
        log::info!("trace reset for stroke '{}'", self.name);
        feedback::play_at(out, self.style.reset_sound, self.pointer);
        self.current_index = 0;
        out.set_fill(self.index, self.style.guide_color);
        for (i, waypoint) in self.waypoints.iter_mut().enumerate() {
            if waypoint.deactivate() {
                out.set_waypoint_visible(self.index, i, false);
            }
        }
    }

    fn complete_trace(&mut self, out: &mut dyn Presenter) -> TraceResult {
        if self.state == StrokeState::Completed {
            return TraceResult::Ignored;
        }
        log::info!("trace completed for stroke '{}'", self.name);
        feedback::play_at(out, self.style.completed_sound, self.pointer);
        self.state = StrokeState::Completed;
        out.set_fill(self.index, self.style.completed_color.with_alpha(1.0));
        out.set_indicator_visible(false);
        TraceResult::StrokeComplete
    }

    /// Light up the waypoint just passed. The dot trails the index by one:
    /// reaching waypoint k shows dot k, which is index k+1 minus one.
    fn reveal_passed_waypoint(&mut self, out: &mut dyn Presenter) {
        let Some(passed) = self.current_index.checked_sub(1) else {
            return;
        };
        if let Some(waypoint) = self.waypoints.get_mut(passed) {
            if waypoint.activate() {
                out.set_waypoint_visible(self.index, passed, true);
            }
        }
    }
}
