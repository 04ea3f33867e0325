//! Marker descriptors for the frame bar track and pointer

use std::hash::{Hash, Hasher};

use iced::widget::image;
use iced::Color;

use crate::theme;

/// Visual descriptor for one track marker, or for the pointer itself.
///
/// Plain value type: the widget reads it per layout/draw pass and never
/// mutates it. Equality and hashing are structural over all five fields; the
/// image handle compares by its stable id, so two markers sharing a cloned
/// handle are equal while handles decoded from the same bytes are not.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Width in pixels; drives the index-to-offset mapping
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Vertical offset from the top of the composite box, in pixels
    pub top_offset: f32,
    /// Fill color, used when no image is set
    pub color: Color,
    /// Optional bitmap drawn instead of the color fill
    pub image: Option<image::Handle>,
}

impl Marker {
    /// Create a marker of the given size with library defaults.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            top_offset: 0.0,
            color: theme::DEFAULT_MARKER_COLOR,
            image: None,
        }
    }

    /// The library's default pointer: narrow, tall, and yellow.
    pub fn default_pointer() -> Self {
        Self {
            width: theme::DEFAULT_POINTER_WIDTH,
            height: theme::DEFAULT_POINTER_HEIGHT,
            top_offset: 0.0,
            color: theme::DEFAULT_POINTER_COLOR,
            image: None,
        }
    }

    pub fn with_top_offset(mut self, top_offset: f32) -> Self {
        self.top_offset = top_offset;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_image(mut self, image: image::Handle) -> Self {
        self.image = Some(image);
        self
    }

    /// Bottom edge of the marker within the composite box.
    pub fn rise(&self) -> f32 {
        self.height + self.top_offset
    }
}

impl Default for Marker {
    /// A small gray tick, the library default.
    fn default() -> Self {
        Self::new(theme::DEFAULT_MARKER_WIDTH, theme::DEFAULT_MARKER_HEIGHT)
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.top_offset == other.top_offset
            && self.color == other.color
            && self.image == other.image
    }
}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
        self.top_offset.to_bits().hash(state);
        self.color.r.to_bits().hash(state);
        self.color.g.to_bits().hash(state);
        self.color.b.to_bits().hash(state);
        self.color.a.to_bits().hash(state);
        self.image.as_ref().map(image::Handle::id).hash(state);
    }
}

/// Widths of a marker list, in track order.
pub(crate) fn marker_widths(markers: &[Marker]) -> Vec<f32> {
    markers.iter().map(|marker| marker.width).collect()
}
