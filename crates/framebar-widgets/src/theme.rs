//! Shared visual defaults for the frame bar widgets
//!
//! Library defaults used when a caller builds markers without explicit
//! styling; every value can be overridden per marker.

use iced::Color;

/// Default marker fill (mid gray)
pub const DEFAULT_MARKER_COLOR: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Default pointer fill (yellow)
pub const DEFAULT_POINTER_COLOR: Color = Color::from_rgb(1.0, 1.0, 0.0);

/// Default marker size in pixels
pub const DEFAULT_MARKER_WIDTH: f32 = 5.0;
pub const DEFAULT_MARKER_HEIGHT: f32 = 5.0;

/// Default pointer size in pixels (narrow and tall, overhanging the track)
pub const DEFAULT_POINTER_WIDTH: f32 = 5.0;
pub const DEFAULT_POINTER_HEIGHT: f32 = 40.0;
