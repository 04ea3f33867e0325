//! Frame bar slider widgets for iced applications
//!
//! A frame bar is a slider whose track is a strip of markers: a fixed
//! pointer sits over the strip and dragging scrolls the strip beneath it.
//! Continuous bars drive a float value (raw pixels or a caller range);
//! discrete bars drive a frame index.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **Widget struct in app state**: [`FrameBar`] owns the drag session and
//!   exposes `handle_event` for the update function
//! - **View function**: `FrameBar::view` takes a callback and returns an
//!   `Element`; gestures arrive as [`FrameBarEvent`]s
//! - **Canvas program**: custom drawing only, one draw call per marker plus
//!   the pointer
//!
//! The geometry itself (offset conversion, track layout, drag clamping)
//! lives in `framebar-core` and has no iced dependency.

pub mod frame_bar;
pub mod marker;
pub mod resource;
pub mod theme;

// Re-export commonly used items
pub use frame_bar::{FrameBar, FrameBarChange, FrameBarEvent};
pub use marker::Marker;
pub use resource::{
    image_from_bytes, image_from_path, read_bytes_sync, sync_loading_supported, ResourceError,
};

// Engine types callers configure the bar with
pub use framebar_core::{CoercePointer, DragValue, Movement, PointerSelection};
