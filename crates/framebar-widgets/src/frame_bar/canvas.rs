//! Canvas program for frame bar rendering
//!
//! Draw-only: gesture events are published by the mouse area wrapping the
//! canvas (see [`FrameBar::view`]), so the program carries no interaction
//! state of its own.

use iced::widget::canvas::{self, Event, Frame, Geometry, Program};
use iced::{mouse, Point, Rectangle, Size, Theme};

use super::FrameBar;
use crate::marker::Marker;

pub(super) struct TrackCanvas<'a> {
    pub bar: &'a FrameBar,
}

impl<'a, Message> Program<Message> for TrackCanvas<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        _event: &Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        None
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.bar.is_enabled() && cursor.is_over(bounds) {
            if self.bar.is_dragging() {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let bar = self.bar;
        let layout = bar.controller.layout();

        // The pointer is centered in the composite box and never moves;
        // the strip scrolls beneath it by the current offset.
        let pointer_x = bounds.width / 2.0 - layout.half_pointer_width();
        let track_x = layout.track_origin(pointer_x, bar.controller.raw_offset());

        for (marker, start) in bar.markers.iter().zip(layout.cumulative()) {
            draw_marker(
                &mut frame,
                marker,
                Point::new(track_x + start, marker.top_offset),
            );
        }
        draw_marker(
            &mut frame,
            &bar.pointer,
            Point::new(pointer_x, bar.pointer.top_offset),
        );

        vec![frame.into_geometry()]
    }
}

/// Draw one marker: its bitmap when set, a color fill otherwise.
fn draw_marker(frame: &mut Frame, marker: &Marker, top_left: Point) {
    let size = Size::new(marker.width, marker.height);
    match &marker.image {
        Some(handle) => {
            frame.draw_image(Rectangle::new(top_left, size), canvas::Image::new(handle.clone()));
        }
        None => frame.fill_rectangle(top_left, size, marker.color),
    }
}
