//! Frame bar widget: a slider whose track is a strip of markers
//!
//! The pointer sits fixed at the center of the widget; dragging scrolls the
//! marker strip beneath it. Movement is either continuous (a float value,
//! optionally mapped into a caller range) or discrete (a frame index snapped
//! to the marker list).
//!
//! # Usage
//!
//! ```rust,ignore
//! // Create the bar once, in your app state
//! let mut bar = FrameBar::discrete(Marker::default_pointer(), markers);
//!
//! // In your view function
//! bar.view(|event| Message::FrameBar(event))
//!
//! // In your update function
//! match bar.handle_event(event) {
//!     Some(FrameBarChange::IndexChanged(index)) => { /* seek */ }
//!     Some(FrameBarChange::DragStarted | FrameBarChange::DragFinished) => {}
//!     _ => {}
//! }
//! ```

mod canvas;

use std::ops::RangeInclusive;

use iced::widget::{mouse_area, Canvas};
use iced::{Element, Length, Point, Size};

use framebar_core::{
    CoercePointer, DragController, DragValue, Movement, PointerSelection, TrackLayout,
};

use crate::marker::{marker_widths, Marker};

/// Messages emitted by a frame bar during interaction
#[derive(Debug, Clone)]
pub enum FrameBarEvent {
    /// Mouse button pressed on the bar
    Pressed,
    /// Mouse button released
    Released,
    /// Mouse moved to position (for drag handling)
    Moved(Point),
}

/// State changes reported by [`FrameBar::handle_event`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameBarChange {
    /// The continuous value changed (continuous bars)
    ValueChanged(f32),
    /// The selected frame changed (discrete bars)
    IndexChanged(usize),
    /// A drag gesture began
    DragStarted,
    /// The drag gesture ended
    DragFinished,
}

/// A draggable marker-strip slider.
///
/// Lives in application state, like any stateful widget: `view` renders it,
/// and the events its mouse area publishes are routed back through
/// [`handle_event`] in the update function.
#[derive(Debug, Clone)]
pub struct FrameBar {
    pointer: Marker,
    markers: Vec<Marker>,
    selection: PointerSelection,
    coerce: CoercePointer,
    controller: DragController,
    last_cursor: Option<Point>,
}

impl FrameBar {
    /// Continuous bar: the driven value is the raw pixel offset, or a value
    /// in the range set via [`with_value_range`](Self::with_value_range).
    pub fn continuous(pointer: Marker, markers: Vec<Marker>) -> Self {
        Self::new(Movement::Continuous, pointer, markers)
    }

    /// Discrete bar: the driven value is a frame index. Pointer coercion
    /// defaults off, as with continuous bars.
    pub fn discrete(pointer: Marker, markers: Vec<Marker>) -> Self {
        Self::new(Movement::Discrete, pointer, markers)
    }

    fn new(movement: Movement, pointer: Marker, markers: Vec<Marker>) -> Self {
        let selection = PointerSelection::default();
        let coerce = CoercePointer::default();
        let layout = TrackLayout::new(&marker_widths(&markers), pointer.width, coerce, selection);

        Self {
            pointer,
            markers,
            selection,
            coerce,
            controller: DragController::new(movement, layout),
            last_cursor: None,
        }
    }

    /// Rebuild the track layout from the current markers, pointer, coercion,
    /// and selection, then install it on the controller so the offset is
    /// re-derived from the last reported value.
    fn relayout(&mut self) {
        let layout = TrackLayout::new(
            &marker_widths(&self.markers),
            self.pointer.width,
            self.coerce,
            self.selection,
        );
        self.controller.set_layout(layout);
    }

    /// Map the continuous value into `range` instead of raw pixels.
    pub fn with_value_range(mut self, range: RangeInclusive<f32>) -> Self {
        self.controller.set_value_range(Some(range));
        self
    }

    /// Align a different point of the pointer with the track's reference
    /// offset (default: center).
    pub fn with_pointer_selection(mut self, selection: PointerSelection) -> Self {
        self.selection = selection;
        self.relayout();
        self
    }

    /// Keep the pointer inside the track by shrinking the draggable extent.
    pub fn with_coerced_pointer(mut self, coerce: CoercePointer) -> Self {
        self.coerce = coerce;
        self.relayout();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Enable or disable gesture handling. A disabled bar still lays out and
    /// renders; an in-flight drag ends.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.controller.set_enabled(enabled);
        if !enabled {
            self.last_cursor = None;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.controller.is_enabled()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Replace the marker list. The track offset is re-derived from the
    /// current value against the new layout.
    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
        self.relayout();
    }

    pub fn pointer(&self) -> &Marker {
        &self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Marker) {
        self.pointer = pointer;
        self.relayout();
    }

    /// Current derived value.
    pub fn current(&self) -> DragValue {
        self.controller.value()
    }

    /// Reconcile with an externally driven value (programmatic seek).
    /// Out-of-range input is clamped to the nearest bound.
    pub fn set_value(&mut self, value: f32) {
        self.controller.sync_value(value);
    }

    /// Reconcile with an externally driven frame index, clamped to the list.
    pub fn set_index(&mut self, index: usize) {
        self.controller.sync_index(index);
    }

    /// Measured composite size: track extent wide, the taller of markers and
    /// pointer high.
    pub fn size(&self) -> Size {
        let width = self.controller.layout().track_extent();
        let markers_rise = self.markers.iter().map(Marker::rise).fold(0.0, f32::max);
        Size::new(width, markers_rise.max(self.pointer.rise()))
    }

    /// Handle an event published by [`view`](Self::view)'s mouse area.
    ///
    /// Call this from your update function when you receive a
    /// [`FrameBarEvent`]. Returns the resulting change, if any.
    pub fn handle_event(&mut self, event: FrameBarEvent) -> Option<FrameBarChange> {
        match event {
            FrameBarEvent::Pressed => {
                self.last_cursor = None;
                self.controller
                    .begin_drag()
                    .then_some(FrameBarChange::DragStarted)
            }
            FrameBarEvent::Released => {
                self.last_cursor = None;
                self.controller
                    .end_drag()
                    .then_some(FrameBarChange::DragFinished)
            }
            FrameBarEvent::Moved(position) => {
                if !self.controller.is_dragging() {
                    return None;
                }
                // The first move after a press only anchors the cursor
                let Some(last) = self.last_cursor.replace(position) else {
                    return None;
                };

                let delta = position.x - last.x;
                self.controller.drag_by(delta).map(|value| match value {
                    DragValue::Continuous(value) => FrameBarChange::ValueChanged(value),
                    DragValue::Frame(index) => FrameBarChange::IndexChanged(index),
                })
            }
        }
    }

    /// Create the view element for this bar.
    ///
    /// The `on_event` callback receives [`FrameBarEvent`]s that should be
    /// passed to [`handle_event`](Self::handle_event) in your update
    /// function.
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        on_event: impl Fn(FrameBarEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        let size = self.size();
        let track = Canvas::new(canvas::TrackCanvas { bar: self })
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height));

        // A disabled bar renders without any gesture surface
        if !self.is_enabled() {
            return track.into();
        }

        let on_press = on_event(FrameBarEvent::Pressed);
        let on_release = on_event(FrameBarEvent::Released);

        mouse_area(track)
            .on_press(on_press)
            .on_release(on_release)
            .on_move(move |position| on_event(FrameBarEvent::Moved(position)))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(count: usize, width: f32) -> Vec<Marker> {
        (0..count).map(|_| Marker::new(width, 20.0)).collect()
    }

    #[test]
    fn test_drag_gesture_reports_frame_changes() {
        let mut bar = FrameBar::discrete(Marker::new(6.0, 40.0), frames(4, 10.0));

        assert_eq!(
            bar.handle_event(FrameBarEvent::Pressed),
            Some(FrameBarChange::DragStarted)
        );
        // First move anchors the cursor, nothing to report yet
        assert_eq!(bar.handle_event(FrameBarEvent::Moved(Point::new(100.0, 0.0))), None);

        // Dragging the strip 15px to the left selects frame 1
        assert_eq!(
            bar.handle_event(FrameBarEvent::Moved(Point::new(85.0, 0.0))),
            Some(FrameBarChange::IndexChanged(1))
        );
        // Sub-frame movement is suppressed
        assert_eq!(bar.handle_event(FrameBarEvent::Moved(Point::new(83.0, 0.0))), None);

        assert_eq!(
            bar.handle_event(FrameBarEvent::Released),
            Some(FrameBarChange::DragFinished)
        );
        assert_eq!(bar.current(), DragValue::Frame(1));
    }

    #[test]
    fn test_continuous_gesture_reports_range_values() {
        let mut bar = FrameBar::continuous(Marker::new(6.0, 40.0), frames(2, 100.0))
            .with_value_range(0.0..=100.0);

        bar.handle_event(FrameBarEvent::Pressed);
        bar.handle_event(FrameBarEvent::Moved(Point::new(300.0, 0.0)));
        assert_eq!(
            bar.handle_event(FrameBarEvent::Moved(Point::new(100.0, 0.0))),
            Some(FrameBarChange::ValueChanged(100.0))
        );
    }

    #[test]
    fn test_disabled_bar_ignores_gestures() {
        let mut bar =
            FrameBar::discrete(Marker::new(6.0, 40.0), frames(4, 10.0)).with_enabled(false);

        assert_eq!(bar.handle_event(FrameBarEvent::Pressed), None);
        assert_eq!(bar.handle_event(FrameBarEvent::Moved(Point::new(50.0, 0.0))), None);
        assert_eq!(bar.handle_event(FrameBarEvent::Released), None);
    }

    #[test]
    fn test_measured_size_spans_markers_and_pointer() {
        let markers = vec![
            Marker::new(10.0, 20.0).with_top_offset(5.0),
            Marker::new(30.0, 10.0),
        ];
        let bar = FrameBar::continuous(Marker::new(6.0, 40.0), markers);

        let size = bar.size();
        assert_eq!(size.width, 40.0);
        assert_eq!(size.height, 40.0);
    }

    #[test]
    fn test_external_index_update_moves_offset() {
        let mut bar = FrameBar::discrete(Marker::new(6.0, 40.0), frames(4, 10.0));

        bar.set_index(3);
        assert_eq!(bar.current(), DragValue::Frame(3));
        assert_eq!(bar.controller.raw_offset(), 35.0);
    }

    #[test]
    fn test_marker_list_change_keeps_selection_in_bounds() {
        let mut bar = FrameBar::discrete(Marker::new(6.0, 40.0), frames(4, 10.0));
        bar.set_index(2);

        bar.set_markers(frames(4, 20.0));
        assert_eq!(bar.current(), DragValue::Frame(2));
        assert_eq!(bar.controller.raw_offset(), 50.0);
    }
}
