//! Drag state machine: clamped delta accumulation and change notification
//!
//! The controller is the single stateful piece of the engine. It owns the
//! raw track offset of the current selection, consumes signed pixel deltas
//! from the gesture layer, and decides when the derived value has actually
//! changed and is worth reporting.

use std::ops::RangeInclusive;

use crate::convert::convert_range;
use crate::layout::TrackLayout;
use crate::types::Movement;

/// Value derived from the current track offset.
///
/// Continuous values compare as floats, frame indices as integers, so
/// change suppression is exact in both modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragValue {
    /// Continuous position: raw pixels, or mapped into the value range
    Continuous(f32),
    /// Discrete frame index
    Frame(usize),
}

/// Stateful accumulator for drag gestures.
///
/// `raw_offset` stays within `[0, draggable_extent]` at all times. It is
/// re-derived from the external value whenever that value changes outside of
/// a drag ([`sync_value`](Self::sync_value) / [`sync_index`](Self::sync_index)),
/// and from the last reported value whenever the layout changes, so the
/// controller never desyncs from an externally driven source of truth.
#[derive(Debug, Clone)]
pub struct DragController {
    movement: Movement,
    value_range: Option<RangeInclusive<f32>>,
    layout: TrackLayout,
    raw_offset: f32,
    last_value: DragValue,
    dragging: bool,
    enabled: bool,
}

impl DragController {
    pub fn new(movement: Movement, layout: TrackLayout) -> Self {
        let mut controller = Self {
            movement,
            value_range: None,
            layout,
            raw_offset: 0.0,
            last_value: DragValue::Frame(0),
            dragging: false,
            enabled: true,
        };
        controller.last_value = controller.derive(0.0);
        controller
    }

    /// Map continuous values into `range` instead of raw pixels.
    pub fn set_value_range(&mut self, range: Option<RangeInclusive<f32>>) {
        self.value_range = range;
        self.last_value = self.derive(self.raw_offset);
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Current clamped track offset in pixels.
    pub fn raw_offset(&self) -> f32 {
        self.raw_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable gesture handling. Disabling ends an in-flight drag;
    /// layout and rendering are unaffected.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.dragging = false;
        }
    }

    /// Install a new layout (marker list or pointer changed) and re-derive
    /// the offset from the last reported value so it stays in bounds.
    pub fn set_layout(&mut self, layout: TrackLayout) {
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        match self.last_value {
            DragValue::Continuous(value) => self.sync_value(value),
            DragValue::Frame(index) => self.sync_index(index),
        }
        log::debug!(
            "drag layout updated: track={}px draggable={}px offset={}px",
            self.layout.track_extent(),
            self.layout.draggable_extent(),
            self.raw_offset,
        );
    }

    /// Reconcile with an externally driven continuous value (programmatic
    /// seek). Out-of-range input is clamped to the nearest bound.
    pub fn sync_value(&mut self, value: f32) {
        let draggable = self.layout.draggable_extent();
        let (raw, value) = match &self.value_range {
            None => {
                let clamped = value.clamp(0.0, draggable);
                (clamped, clamped)
            }
            Some(range) => {
                let clamped = value.clamp(*range.start(), *range.end());
                let raw = if draggable > 0.0 {
                    convert_range(clamped, range.clone(), 0.0..=draggable)
                } else {
                    0.0
                };
                (raw, clamped)
            }
        };
        self.raw_offset = raw;
        self.last_value = DragValue::Continuous(value);
    }

    /// Reconcile with an externally driven frame index, clamped to the list.
    pub fn sync_index(&mut self, index: usize) {
        let frames = self.layout.frame_count();
        let index = if frames == 0 { 0 } else { index.min(frames - 1) };
        self.raw_offset = self
            .layout
            .offset_for_index(index)
            .clamp(0.0, self.layout.draggable_extent());
        self.last_value = DragValue::Frame(index);
    }

    /// Enter the Dragging state. Returns false when disabled or already
    /// dragging, so the caller can forward a started notification exactly
    /// once per gesture.
    pub fn begin_drag(&mut self) -> bool {
        if !self.enabled || self.dragging {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Leave the Dragging state. Returns true when a drag was in progress.
    /// The last applied delta stays committed.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.dragging;
        self.dragging = false;
        was_dragging
    }

    /// Apply one signed pixel delta from the gesture layer.
    ///
    /// The delta is inverted: dragging the strip content leftwards advances
    /// the selection. The clamped offset is always stored, even when the
    /// derived value is unchanged; the value is returned only when it
    /// differs from the last reported one.
    pub fn drag_by(&mut self, delta: f32) -> Option<DragValue> {
        if !self.enabled || !self.dragging {
            return None;
        }

        let candidate = (self.raw_offset - delta).clamp(0.0, self.layout.draggable_extent());
        self.raw_offset = candidate;

        let derived = self.derive(candidate);
        if derived != self.last_value {
            self.last_value = derived;
            Some(derived)
        } else {
            None
        }
    }

    /// Current derived value, without touching notification state.
    pub fn value(&self) -> DragValue {
        self.derive(self.raw_offset)
    }

    fn derive(&self, offset: f32) -> DragValue {
        match self.movement {
            Movement::Continuous => match &self.value_range {
                None => DragValue::Continuous(offset),
                Some(range) => {
                    let draggable = self.layout.draggable_extent();
                    // A zero-width draggable extent (coerced pointer wider
                    // than the track) pins the value to the range start
                    // instead of dividing by zero.
                    if draggable > 0.0 {
                        DragValue::Continuous(convert_range(
                            offset,
                            0.0..=draggable,
                            range.clone(),
                        ))
                    } else {
                        DragValue::Continuous(*range.start())
                    }
                }
            },
            Movement::Discrete => DragValue::Frame(self.layout.index_for_offset(offset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoercePointer, PointerSelection};

    fn layout(widths: &[f32], pointer_width: f32, coerce: CoercePointer) -> TrackLayout {
        TrackLayout::new(widths, pointer_width, coerce, PointerSelection::Center)
    }

    #[test]
    fn test_drag_clamps_to_draggable_extent() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[50.0, 50.0], 10.0, CoercePointer::NotCoerced),
        );
        assert!(controller.begin_drag());

        // Deltas summing past the extent pin the offset to the bound exactly
        controller.drag_by(-60.0);
        controller.drag_by(-60.0);
        controller.drag_by(-60.0);
        assert_eq!(controller.raw_offset(), 100.0);

        controller.drag_by(500.0);
        assert_eq!(controller.raw_offset(), 0.0);
    }

    #[test]
    fn test_change_notification_suppressed_for_identical_value() {
        let mut controller = DragController::new(
            Movement::Discrete,
            layout(&[10.0, 10.0, 10.0, 10.0], 6.0, CoercePointer::NotCoerced),
        );
        assert!(controller.begin_drag());

        assert_eq!(controller.drag_by(-15.0), Some(DragValue::Frame(1)));
        // Sub-frame movement still updates the offset but reports nothing
        assert_eq!(controller.drag_by(-1.0), None);
        assert_eq!(controller.raw_offset(), 16.0);
        assert_eq!(controller.drag_by(-10.0), Some(DragValue::Frame(2)));
    }

    #[test]
    fn test_continuous_notification_suppressed_at_bound() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[50.0, 50.0], 10.0, CoercePointer::NotCoerced),
        );
        assert!(controller.begin_drag());

        assert_eq!(controller.drag_by(-300.0), Some(DragValue::Continuous(100.0)));
        // Already pinned at the bound: same derived value, no notification
        assert_eq!(controller.drag_by(-10.0), None);
    }

    #[test]
    fn test_continuous_value_mapped_into_range() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[100.0, 100.0], 10.0, CoercePointer::NotCoerced),
        );
        controller.set_value_range(Some(0.0..=100.0));
        assert!(controller.begin_drag());

        assert_eq!(controller.drag_by(-200.0), Some(DragValue::Continuous(100.0)));
        assert_eq!(controller.raw_offset(), 200.0);
    }

    #[test]
    fn test_sync_value_clamps_out_of_range_input() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[100.0, 100.0], 10.0, CoercePointer::NotCoerced),
        );
        controller.set_value_range(Some(0.0..=100.0));

        controller.sync_value(150.0);
        assert_eq!(controller.raw_offset(), 200.0);
        assert_eq!(controller.value(), DragValue::Continuous(100.0));

        controller.sync_value(-20.0);
        assert_eq!(controller.raw_offset(), 0.0);
    }

    #[test]
    fn test_sync_index_clamps_and_centers() {
        let mut controller = DragController::new(
            Movement::Discrete,
            layout(&[10.0, 10.0, 10.0, 10.0], 6.0, CoercePointer::NotCoerced),
        );

        controller.sync_index(2);
        assert_eq!(controller.raw_offset(), 25.0);

        controller.sync_index(99);
        assert_eq!(controller.value(), DragValue::Frame(3));
        assert_eq!(controller.raw_offset(), 35.0);
    }

    #[test]
    fn test_sync_resets_notification_baseline() {
        let mut controller = DragController::new(
            Movement::Discrete,
            layout(&[10.0, 10.0, 10.0, 10.0], 6.0, CoercePointer::NotCoerced),
        );
        controller.sync_index(1);
        assert!(controller.begin_drag());

        // Wiggling within the synced frame reports nothing
        assert_eq!(controller.drag_by(-1.0), None);
        assert_eq!(controller.drag_by(1.0), None);
        assert_eq!(controller.drag_by(-10.0), Some(DragValue::Frame(2)));
    }

    #[test]
    fn test_set_layout_rederives_offset() {
        let mut controller = DragController::new(
            Movement::Discrete,
            layout(&[10.0, 10.0, 10.0, 10.0], 6.0, CoercePointer::NotCoerced),
        );
        controller.sync_index(2);

        controller.set_layout(layout(&[20.0, 20.0, 20.0, 20.0], 6.0, CoercePointer::NotCoerced));
        assert_eq!(controller.value(), DragValue::Frame(2));
        assert_eq!(controller.raw_offset(), 50.0);
    }

    #[test]
    fn test_disabled_controller_ignores_gestures() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[50.0, 50.0], 10.0, CoercePointer::NotCoerced),
        );
        controller.set_enabled(false);

        assert!(!controller.begin_drag());
        assert_eq!(controller.drag_by(-30.0), None);
        assert_eq!(controller.raw_offset(), 0.0);
    }

    #[test]
    fn test_disable_mid_drag_ends_session() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[50.0, 50.0], 10.0, CoercePointer::NotCoerced),
        );
        assert!(controller.begin_drag());
        controller.set_enabled(false);

        assert!(!controller.is_dragging());
        assert!(!controller.end_drag());
    }

    #[test]
    fn test_drag_state_transitions_fire_once() {
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[50.0, 50.0], 10.0, CoercePointer::NotCoerced),
        );

        assert!(controller.begin_drag());
        assert!(!controller.begin_drag());
        assert!(controller.end_drag());
        assert!(!controller.end_drag());
    }

    #[test]
    fn test_degenerate_draggable_extent_pins_value() {
        // Coerced pointer wider than the track: extent clamps to zero
        let mut controller = DragController::new(
            Movement::Continuous,
            layout(&[4.0], 20.0, CoercePointer::Coerced),
        );
        controller.set_value_range(Some(10.0..=90.0));
        assert!(controller.begin_drag());

        assert_eq!(controller.drag_by(-50.0), None);
        assert_eq!(controller.value(), DragValue::Continuous(10.0));
        assert_eq!(controller.raw_offset(), 0.0);
    }
}
