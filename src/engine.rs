//! Painting engine - stroke state machine driving the rasterizer
//!
//! One engine instance exclusively owns one canvas. All operations are
//! synchronous and single-threaded; events are processed in arrival
//! order and the canvas is only ever mutated through the rasterizer.

use glam::Vec2;
use tracing::{debug, warn};

use crate::brush::{BrushMode, BrushSettings, SmoothingSettings};
use crate::canvas::{Canvas, HistoryStack, Rgba};
use crate::errors::EngineError;
use crate::input::StrokeEvent;
use crate::raster::{fill_dab, stamp_line, Rect};
use crate::spline::sample_segment;

/// Interactive painting engine over a single raster canvas
pub struct PaintEngine {
    canvas: Canvas,
    history: HistoryStack,
    brush: BrushSettings,
    smoothing: SmoothingSettings,
    background: Rgba,
    /// Samples of the in-progress stroke; transient, cleared on end
    stroke: Vec<Vec2>,
    stroking: bool,
    dirty: Rect,
}

impl PaintEngine {
    /// Create an engine with a transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::with_background(width, height, Rgba::TRANSPARENT)
    }

    /// Create an engine whose canvas is filled (and cleared) with the
    /// given background color
    pub fn with_background(width: u32, height: u32, background: Rgba) -> Result<Self, EngineError> {
        Ok(Self {
            canvas: Canvas::with_background(width, height, background)?,
            history: HistoryStack::new(),
            brush: BrushSettings::default(),
            smoothing: SmoothingSettings::default(),
            background,
            stroke: Vec::new(),
            stroking: false,
            dirty: Rect::empty(),
        })
    }

    // --- event entry points ---

    /// Dispatch one logical stroke event (pointer callback or synthesized
    /// from contact polling)
    pub fn handle_event(&mut self, event: StrokeEvent) {
        match event {
            StrokeEvent::Begin(coord) => self.begin_stroke(coord),
            StrokeEvent::Continue(coord) => self.continue_stroke(coord),
            StrokeEvent::End => self.end_stroke(),
        }
    }

    /// Begin a new stroke at a canvas pixel coordinate.
    ///
    /// Pushes a history snapshot, seeds the sample list with the start
    /// point twice (the spline needs a leading control point), and stamps
    /// an immediate dab so a tap is visible with zero movement.
    pub fn begin_stroke(&mut self, coord: Vec2) {
        if self.stroking {
            // A second begin without an end behaves like a drag
            self.continue_stroke(coord);
            return;
        }

        debug!(x = coord.x, y = coord.y, "stroke begin");
        self.stroking = true;
        self.history.push(self.canvas.snapshot());
        self.stroke.clear();
        self.stroke.push(coord);
        self.stroke.push(coord);

        let radius = self.brush.effective_radius();
        let color = self.active_color();
        let dab = fill_dab(&mut self.canvas, coord, radius, color, self.brush.mode);
        self.dirty.union(&dab);
    }

    /// Continue the current stroke with a new sample.
    ///
    /// Samples closer than `min_point_distance` to the last accepted one
    /// are dropped (jitter filter). Once four samples exist, each new
    /// sample rasterizes one spline segment between the middle two of
    /// the last four.
    pub fn continue_stroke(&mut self, coord: Vec2) {
        if !self.stroking {
            debug!("continue ignored while idle");
            return;
        }

        let last = self.stroke[self.stroke.len() - 1];
        if coord.distance(last) < self.smoothing.min_point_distance {
            return;
        }

        self.stroke.push(coord);
        if self.stroke.len() >= 4 {
            self.rasterize_tail_segment();
        }
    }

    /// End the current stroke.
    ///
    /// With at least 3 samples the final sample is duplicated as a
    /// terminal control point and the last segment rasterized, so no
    /// stroke ends with a missing tail.
    pub fn end_stroke(&mut self) {
        if !self.stroking {
            return;
        }
        debug!(samples = self.stroke.len(), "stroke end");

        if self.stroke.len() >= 3 {
            let tail = self.stroke[self.stroke.len() - 1];
            self.stroke.push(tail);
            self.rasterize_tail_segment();
        }

        self.stroke.clear();
        self.stroking = false;
    }

    /// Rasterize the spline segment defined by the last four samples
    fn rasterize_tail_segment(&mut self) {
        let n = self.stroke.len();
        let p0 = self.stroke[n - 4];
        let p1 = self.stroke[n - 3];
        let p2 = self.stroke[n - 2];
        let p3 = self.stroke[n - 1];

        let radius = self.brush.effective_radius();
        let color = self.active_color();
        let mode = self.brush.mode;

        let points = sample_segment(p0, p1, p2, p3, self.smoothing.subdivisions);
        for pair in points.windows(2) {
            let rect = stamp_line(&mut self.canvas, pair[0], pair[1], radius, color, mode);
            self.dirty.union(&rect);
        }
    }

    fn active_color(&self) -> Rgba {
        match self.brush.mode {
            BrushMode::Draw => self.brush.color,
            BrushMode::Erase => Rgba::CLEAR_WHITE,
        }
    }

    // --- brush configuration ---

    pub fn set_brush_mode(&mut self, mode: BrushMode) {
        self.brush.mode = mode;
    }

    /// Set the brush radius; values below 1 pixel are clamped up at
    /// rasterization time rather than rejected
    pub fn set_brush_radius(&mut self, radius: f32) {
        self.brush.radius = radius;
    }

    pub fn set_brush_color(&mut self, color: Rgba) {
        self.brush.color = color;
    }

    pub fn set_smoothing(&mut self, smoothing: SmoothingSettings) {
        self.smoothing = smoothing;
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn smoothing(&self) -> &SmoothingSettings {
        &self.smoothing
    }

    // --- history ---

    /// Restore the canvas to the most recent snapshot. Returns whether
    /// anything was undone; an empty history is a logged no-op.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.canvas.restore(&snapshot);
                self.dirty.union(&self.full_rect());
                true
            }
            None => {
                warn!("undo with empty history");
                false
            }
        }
    }

    /// Clear the canvas to the background color; undoable
    pub fn clear_canvas(&mut self) {
        self.history.push(self.canvas.snapshot());
        self.canvas.fill(self.background);
        self.dirty.union(&self.full_rect());
    }

    /// Clear the canvas and drop all history; not undoable
    pub fn clear_canvas_and_history(&mut self) {
        self.history.reset();
        self.canvas.fill(self.background);
        self.dirty.union(&self.full_rect());
    }

    /// Drop all history without touching the canvas
    pub fn reset_history(&mut self) {
        self.history.reset();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // --- read access ---

    /// The current pixel buffer, for display or export
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of accepted samples in the in-progress stroke
    pub fn sample_count(&self) -> usize {
        self.stroke.len()
    }

    pub fn is_stroking(&self) -> bool {
        self.stroking
    }

    /// Take the dirty region accumulated since the last call. The
    /// display collaborator should flush this once per input event.
    pub fn take_dirty(&mut self) -> Option<Rect> {
        if self.dirty.is_empty() {
            return None;
        }
        Some(std::mem::replace(&mut self.dirty, Rect::empty()))
    }

    fn full_rect(&self) -> Rect {
        Rect {
            left: 0,
            top: 0,
            right: self.canvas.width() as i32,
            bottom: self.canvas.height() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_64() -> PaintEngine {
        let mut engine = PaintEngine::new(64, 64).unwrap();
        engine.set_smoothing(SmoothingSettings {
            min_point_distance: 1.0,
            subdivisions: 10,
        });
        engine
    }

    fn painted_count(engine: &PaintEngine) -> usize {
        engine
            .canvas()
            .pixels()
            .iter()
            .filter(|p| **p != Rgba::TRANSPARENT)
            .count()
    }

    #[test]
    fn test_tap_leaves_single_dab() {
        let mut engine = engine_64();
        engine.set_brush_radius(3.0);
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        engine.end_stroke();

        // Exactly the disk of squared distance <= 9 around (10,10)
        for y in 0..64u32 {
            for x in 0..64u32 {
                let dx = x as i32 - 10;
                let dy = y as i32 - 10;
                let inside = dx * dx + dy * dy <= 9;
                let painted = engine.canvas().pixel(x, y).unwrap() != Rgba::TRANSPARENT;
                assert_eq!(inside, painted, "mismatch at ({x},{y})");
            }
        }
    }

    #[test]
    fn test_horizontal_stroke_has_no_gaps() {
        let mut engine = engine_64();
        engine.set_brush_radius(1.0);
        engine.begin_stroke(Vec2::new(0.0, 0.0));
        engine.continue_stroke(Vec2::new(50.0, 0.0));
        engine.end_stroke();

        for x in (0..=50).step_by(5) {
            assert_ne!(
                engine.canvas().pixel(x, 0).unwrap(),
                Rgba::TRANSPARENT,
                "gap at ({x},0)"
            );
        }
    }

    #[test]
    fn test_jitter_filter_drops_close_samples() {
        let mut engine = engine_64();
        engine.set_smoothing(SmoothingSettings {
            min_point_distance: 5.0,
            subdivisions: 10,
        });
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        assert_eq!(engine.sample_count(), 2);

        engine.continue_stroke(Vec2::new(11.0, 10.0));
        assert_eq!(engine.sample_count(), 2);

        engine.continue_stroke(Vec2::new(20.0, 10.0));
        assert_eq!(engine.sample_count(), 3);
    }

    #[test]
    fn test_undo_restores_pre_stroke_canvas() {
        let mut engine = engine_64();
        engine.begin_stroke(Vec2::new(5.0, 5.0));
        for i in 1..=5 {
            engine.continue_stroke(Vec2::new(5.0 + i as f32 * 8.0, 5.0));
        }
        engine.end_stroke();
        assert!(painted_count(&engine) > 0);

        assert!(engine.undo());
        assert_eq!(painted_count(&engine), 0);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut engine = engine_64();
        assert!(!engine.undo());
    }

    #[test]
    fn test_clear_canvas_is_undoable() {
        let mut engine = engine_64();
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        engine.end_stroke();
        let painted = painted_count(&engine);

        engine.clear_canvas();
        assert_eq!(painted_count(&engine), 0);

        assert!(engine.undo());
        assert_eq!(painted_count(&engine), painted);
    }

    #[test]
    fn test_clear_canvas_and_history_idempotent() {
        let mut engine = engine_64();
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        engine.end_stroke();

        engine.clear_canvas_and_history();
        let once = engine.canvas().pixels().to_vec();
        assert_eq!(engine.history_len(), 0);

        engine.clear_canvas_and_history();
        assert_eq!(engine.canvas().pixels(), &once[..]);
        assert!(!engine.undo());
    }

    #[test]
    fn test_short_stroke_skips_final_segment() {
        let mut engine = engine_64();
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        // Only the duplicated begin samples exist; end must not panic
        // and must not rasterize a tail segment
        engine.end_stroke();
        assert!(!engine.is_stroking());
        assert_eq!(engine.sample_count(), 0);
    }

    #[test]
    fn test_continue_while_idle_ignored() {
        let mut engine = engine_64();
        engine.continue_stroke(Vec2::new(10.0, 10.0));
        assert_eq!(painted_count(&engine), 0);
        assert!(!engine.is_stroking());
    }

    #[test]
    fn test_begin_while_stroking_acts_as_continue() {
        let mut engine = engine_64();
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        let history = engine.history_len();
        engine.begin_stroke(Vec2::new(30.0, 10.0));
        // No second snapshot pushed
        assert_eq!(engine.history_len(), history);
    }

    #[test]
    fn test_erase_restores_transparency() {
        let mut engine = engine_64();
        engine.set_brush_radius(5.0);
        engine.begin_stroke(Vec2::new(20.0, 20.0));
        engine.end_stroke();
        assert_ne!(engine.canvas().pixel(20, 20).unwrap(), Rgba::TRANSPARENT);

        engine.set_brush_mode(BrushMode::Erase);
        engine.begin_stroke(Vec2::new(20.0, 20.0));
        engine.end_stroke();
        assert_eq!(engine.canvas().pixel(20, 20).unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_brush_settings_effective_next_dab() {
        let mut engine = engine_64();
        engine.set_brush_color(Rgba::new(1.0, 0.0, 0.0, 1.0));
        engine.begin_stroke(Vec2::new(32.0, 32.0));
        engine.end_stroke();
        assert_eq!(
            engine.canvas().pixel(32, 32).unwrap(),
            Rgba::new(1.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_dirty_rect_reported_once() {
        let mut engine = engine_64();
        engine.begin_stroke(Vec2::new(10.0, 10.0));
        let dirty = engine.take_dirty().unwrap();
        assert!(!dirty.is_empty());
        assert!(engine.take_dirty().is_none());
    }

    #[test]
    fn test_event_dispatch() {
        let mut engine = engine_64();
        engine.handle_event(StrokeEvent::Begin(Vec2::new(5.0, 5.0)));
        assert!(engine.is_stroking());
        engine.handle_event(StrokeEvent::Continue(Vec2::new(25.0, 5.0)));
        engine.handle_event(StrokeEvent::End);
        assert!(!engine.is_stroking());
    }
}
