use glam::Vec2;

use crate::feedback::Presenter;
use crate::stroke::{TraceResult, TraceStroke};

/// Result of feeding a pointer event to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterResult {
    /// Nothing changed at the letter level.
    Ignored,
    /// The pressed stroke made progress, or was reset.
    Stroke(TraceResult),
    /// A stroke was finished and the next one is now active.
    StrokeComplete { completed: usize, next: usize },
    /// The last stroke was finished. Reported once.
    LetterComplete,
}

/// Walks the player through a letter's strokes in their configured order.
///
/// Only the stroke at `active_index` accepts input. Strokes before it are
/// completed; strokes after it are disabled until their turn.
#[derive(Debug, Clone)]
pub struct LetterProgress {
    name: String,
    strokes: Vec<TraceStroke>,
    active_index: usize,
    /// Stroke that received the current press, if any.
    pressed: Option<usize>,
    finished: bool,
}

impl LetterProgress {
    pub fn new(name: impl Into<String>, strokes: Vec<TraceStroke>) -> Self {
        let strokes = strokes
            .into_iter()
            .enumerate()
            .map(|(i, stroke)| stroke.with_index(i))
            .collect();
        Self {
            name: name.into(),
            strokes,
            active_index: 0,
            pressed: None,
            finished: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strokes(&self) -> &[TraceStroke] {
        &self.strokes
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The stroke currently accepting input, if the letter isn't finished.
    pub fn active_stroke(&self) -> Option<&TraceStroke> {
        self.strokes.get(self.active_index)
    }

    pub fn is_complete(&self) -> bool {
        self.finished
    }

    /// Prepare every stroke and hand the first one to the player.
    ///
    /// Strokes report completion only through their return values, which this
    /// letter consumes itself, so calling this again never double-subscribes.
    pub fn initialize(&mut self, out: &mut dyn Presenter) {
        self.active_index = 0;
        self.pressed = None;
        self.finished = false;
        for stroke in &mut self.strokes {
            stroke.prepare(out);
        }
        if !self.strokes.is_empty() {
            self.activate_current(out);
        }
        log::info!("letter '{}' initialized with {} strokes", self.name, self.strokes.len());
    }

    fn activate_current(&mut self, out: &mut dyn Presenter) {
        if let Some(stroke) = self.strokes.get_mut(self.active_index) {
            stroke.set_enabled(true);
            stroke.activate(out);
        }
    }

    /// Advance past the active stroke after it reported completion.
    pub fn on_stroke_completed(&mut self, out: &mut dyn Presenter) -> LetterResult {
        if self.finished {
            log::warn!(
                "letter '{}' got a stroke completion after it was already complete",
                self.name
            );
            return LetterResult::Ignored;
        }

        let completed = self.active_index;
        if let Some(stroke) = self.strokes.get_mut(completed) {
            stroke.set_enabled(false);
        }
        self.active_index += 1;

        if self.active_index >= self.strokes.len() {
            self.finished = true;
            log::info!("letter '{}' completed", self.name);
            LetterResult::LetterComplete
        } else {
            self.activate_current(out);
            LetterResult::StrokeComplete {
                completed,
                next: self.active_index,
            }
        }
    }

    /// Pointer pressed. Prefers the active stroke when regions overlap.
    /// A press while another is held is ignored; that gesture's release ends it.
    pub fn pointer_down(&mut self, pos: Vec2, out: &mut dyn Presenter) -> LetterResult {
        if self.pressed.is_some() {
            log::debug!("letter '{}' ignoring second press", self.name);
            return LetterResult::Ignored;
        }

        let hit = self
            .strokes
            .get(self.active_index)
            .filter(|s| s.contains(pos))
            .map(|s| s.index())
            .or_else(|| self.strokes.iter().position(|s| s.contains(pos)));

        let Some(index) = hit else {
            return LetterResult::Ignored;
        };
        self.pressed = Some(index);
        match self.strokes[index].begin_input(pos, out) {
            TraceResult::Ignored => LetterResult::Ignored,
            result => LetterResult::Stroke(result),
        }
    }

    /// Pointer dragged. Leaving the pressed stroke's region fails the attempt.
    pub fn pointer_move(&mut self, pos: Vec2, out: &mut dyn Presenter) -> LetterResult {
        let Some(index) = self.pressed else {
            return LetterResult::Ignored;
        };
        let stroke = &mut self.strokes[index];
        let result = if stroke.is_tracing() && !stroke.contains(pos) {
            stroke.exit_region(out)
        } else {
            stroke.update_input(pos, out)
        };
        self.route(result, out)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, out: &mut dyn Presenter) -> LetterResult {
        match self.pressed.take() {
            Some(index) => {
                let result = self.strokes[index].end_input(out);
                self.route(result, out)
            }
            None => LetterResult::Ignored,
        }
    }

    /// The platform aborted the gesture; treated like a release.
    pub fn pointer_cancel(&mut self, out: &mut dyn Presenter) -> LetterResult {
        self.pointer_up(out)
    }

    fn route(&mut self, result: TraceResult, out: &mut dyn Presenter) -> LetterResult {
        match result {
            TraceResult::Ignored => LetterResult::Ignored,
            TraceResult::StrokeComplete => self.on_stroke_completed(out),
            other => LetterResult::Stroke(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::testing::Recorder;
    use crate::region::Region;
    use crate::stroke::StrokeState;

    /// Three horizontal strokes stacked at y = 0, 10, 20, each with its own band.
    fn three_strokes() -> LetterProgress {
        let strokes = (0..3)
            .map(|row| {
                let y = row as f32 * 10.0;
                let points = vec![Vec2::new(0.0, y), Vec2::new(5.0, y)];
                TraceStroke::new(format!("s{row}"), points.clone(), 1.0).with_region(
                    Region::Corridor {
                        path: points,
                        half_width: 2.0,
                    },
                )
            })
            .collect();
        LetterProgress::new("E", strokes)
    }

    /// Drag the full length of stroke `row`.
    fn trace_row(letter: &mut LetterProgress, row: usize, rec: &mut Recorder) -> LetterResult {
        let y = row as f32 * 10.0;
        letter.pointer_down(Vec2::new(0.0, y), rec);
        letter.pointer_move(Vec2::new(0.0, y), rec);
        let result = letter.pointer_move(Vec2::new(5.0, y), rec);
        letter.pointer_up(rec);
        result
    }

    fn enabled(letter: &LetterProgress) -> Vec<bool> {
        letter.strokes().iter().map(|s| s.is_enabled()).collect()
    }

    #[test]
    fn only_first_stroke_accepts_input_initially() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);

        assert_eq!(enabled(&letter), vec![true, false, false]);
        assert_eq!(letter.strokes()[0].state(), StrokeState::Guiding);
        assert_eq!(letter.strokes()[1].state(), StrokeState::Inactive);

        // Pressing the second stroke does nothing.
        assert_eq!(letter.pointer_down(Vec2::new(0.0, 10.0), &mut rec), LetterResult::Ignored);
        letter.pointer_move(Vec2::new(0.0, 10.0), &mut rec);
        assert_eq!(letter.strokes()[1].current_index(), 0);
    }

    #[test]
    fn strokes_are_traced_in_sequence() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);

        assert_eq!(
            trace_row(&mut letter, 0, &mut rec),
            LetterResult::StrokeComplete { completed: 0, next: 1 }
        );
        assert_eq!(enabled(&letter), vec![false, true, false]);
        assert!(letter.strokes()[0].is_completed());
        assert_eq!(rec.last_fill(0).map(|c| c.a), Some(1.0));
        assert_eq!(letter.active_index(), 1);

        assert_eq!(
            trace_row(&mut letter, 1, &mut rec),
            LetterResult::StrokeComplete { completed: 1, next: 2 }
        );
        assert_eq!(trace_row(&mut letter, 2, &mut rec), LetterResult::LetterComplete);
        assert!(letter.is_complete());
        assert!(letter.active_stroke().is_none());
        assert_eq!(enabled(&letter), vec![false, false, false]);
    }

    #[test]
    fn letter_completion_is_reported_once() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);
        let results: Vec<_> = (0..3).map(|row| trace_row(&mut letter, row, &mut rec)).collect();
        assert_eq!(
            results.iter().filter(|r| **r == LetterResult::LetterComplete).count(),
            1
        );

        // A stray completion after the end is ignored.
        assert_eq!(letter.on_stroke_completed(&mut rec), LetterResult::Ignored);
        assert_eq!(letter.active_index(), 3);

        // Retracing a finished stroke goes nowhere.
        assert_eq!(trace_row(&mut letter, 2, &mut rec), LetterResult::Ignored);
    }

    #[test]
    fn leaving_the_band_resets_the_stroke() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);

        letter.pointer_down(Vec2::new(0.0, 0.0), &mut rec);
        letter.pointer_move(Vec2::new(0.0, 0.0), &mut rec);
        assert_eq!(letter.strokes()[0].current_index(), 1);

        assert_eq!(
            letter.pointer_move(Vec2::new(3.0, 6.0), &mut rec),
            LetterResult::Stroke(TraceResult::Reset)
        );
        assert_eq!(letter.strokes()[0].current_index(), 0);
        assert!(!letter.strokes()[0].is_tracing());

        // Coming back without pressing again does not resume.
        letter.pointer_move(Vec2::new(5.0, 0.0), &mut rec);
        assert_eq!(letter.strokes()[0].current_index(), 0);
        assert_eq!(letter.pointer_up(&mut rec), LetterResult::Ignored);
    }

    #[test]
    fn cancel_behaves_like_release() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);

        letter.pointer_down(Vec2::new(0.0, 0.0), &mut rec);
        letter.pointer_move(Vec2::new(0.0, 0.0), &mut rec);
        assert_eq!(
            letter.pointer_cancel(&mut rec),
            LetterResult::Stroke(TraceResult::Reset)
        );
        assert_eq!(letter.strokes()[0].current_index(), 0);
        assert_eq!(letter.pointer_move(Vec2::new(5.0, 0.0), &mut rec), LetterResult::Ignored);
    }

    #[test]
    fn second_press_does_not_strand_the_trace() {
        let mut rec = Recorder::new();
        let strokes = vec![
            TraceStroke::new(
                "long",
                vec![Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(10.0, 0.0)],
                1.0,
            ),
            TraceStroke::new("next", vec![Vec2::new(0.0, 10.0)], 1.0)
                .with_region(Region::Corridor {
                    path: vec![Vec2::new(0.0, 10.0), Vec2::new(5.0, 10.0)],
                    half_width: 2.0,
                }),
        ];
        let mut letter = LetterProgress::new("L", strokes);
        letter.initialize(&mut rec);

        letter.pointer_down(Vec2::ZERO, &mut rec);
        letter.pointer_move(Vec2::ZERO, &mut rec);
        letter.pointer_move(Vec2::new(5.0, 0.0), &mut rec);
        assert_eq!(letter.strokes()[0].current_index(), 2);

        // A second touch lands on the disabled stroke, then a finger lifts.
        assert_eq!(letter.pointer_down(Vec2::new(0.0, 10.0), &mut rec), LetterResult::Ignored);
        assert_eq!(letter.pointer_up(&mut rec), LetterResult::Stroke(TraceResult::Reset));

        let first = &letter.strokes()[0];
        assert!(!first.is_tracing());
        assert_eq!(first.current_index(), 0);
        assert_eq!(rec.last_indicator_visible(), Some(false));

        // The next press starts from the beginning.
        letter.pointer_down(Vec2::new(5.0, 0.0), &mut rec);
        assert_eq!(
            letter.pointer_move(Vec2::new(5.0, 0.0), &mut rec),
            LetterResult::Stroke(TraceResult::Moved)
        );
        assert_eq!(letter.strokes()[0].current_index(), 0);
    }

    #[test]
    fn press_outside_every_stroke_is_ignored() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);
        assert_eq!(letter.pointer_down(Vec2::new(50.0, 50.0), &mut rec), LetterResult::Ignored);
        assert_eq!(letter.pointer_up(&mut rec), LetterResult::Ignored);
    }

    #[test]
    fn overlapping_regions_prefer_the_active_stroke() {
        let mut rec = Recorder::new();
        let shared = vec![Vec2::ZERO, Vec2::new(5.0, 0.0)];
        let strokes = vec![
            TraceStroke::new("first", shared.clone(), 1.0),
            TraceStroke::new("second", shared, 1.0),
        ];
        let mut letter = LetterProgress::new("=", strokes);
        letter.initialize(&mut rec);

        // Both regions are unbounded; the first stroke is active and wins.
        letter.pointer_down(Vec2::ZERO, &mut rec);
        letter.pointer_move(Vec2::ZERO, &mut rec);
        letter.pointer_move(Vec2::new(5.0, 0.0), &mut rec);
        letter.pointer_up(&mut rec);
        assert_eq!(letter.active_index(), 1);

        // Now the second is active and wins the same spot.
        letter.pointer_down(Vec2::ZERO, &mut rec);
        assert!(letter.strokes()[1].is_tracing());
    }

    #[test]
    fn reinitializing_starts_over_without_double_completion() {
        let mut rec = Recorder::new();
        let mut letter = three_strokes();
        letter.initialize(&mut rec);
        trace_row(&mut letter, 0, &mut rec);

        letter.initialize(&mut rec);
        assert_eq!(letter.active_index(), 0);
        assert_eq!(enabled(&letter), vec![true, false, false]);
        assert!(!letter.strokes()[0].is_completed());

        assert_eq!(
            trace_row(&mut letter, 0, &mut rec),
            LetterResult::StrokeComplete { completed: 0, next: 1 }
        );
        assert_eq!(letter.active_index(), 1);
    }

    #[test]
    fn empty_first_stroke_finishes_on_first_drag() {
        let mut rec = Recorder::new();
        let strokes = vec![
            TraceStroke::new("tap", Vec::new(), 1.0),
            TraceStroke::new("line", vec![Vec2::ZERO], 1.0),
        ];
        let mut letter = LetterProgress::new("i", strokes);
        letter.initialize(&mut rec);

        letter.pointer_down(Vec2::new(3.0, 3.0), &mut rec);
        assert_eq!(
            letter.pointer_move(Vec2::new(3.0, 3.0), &mut rec),
            LetterResult::StrokeComplete { completed: 0, next: 1 }
        );
    }

    #[test]
    fn letter_without_strokes_never_completes() {
        let mut rec = Recorder::new();
        let mut letter = LetterProgress::new("blank", Vec::new());
        letter.initialize(&mut rec);
        assert!(!letter.is_complete());
        assert!(letter.active_stroke().is_none());
        assert_eq!(letter.pointer_down(Vec2::ZERO, &mut rec), LetterResult::Ignored);
    }
}
