//! Geometry and drag engine for the framebar slider widgets
//!
//! This crate holds everything about a frame bar that is independent of the
//! UI toolkit: converting between value-space and pixel-space, laying out a
//! strip of markers, and accumulating drag deltas into a clamped track
//! offset. The iced rendering layer lives in `framebar-widgets`.
//!
//! ## Architecture
//!
//! - **Conversions** (`convert`): pure functions mapping a float between two
//!   ranges, a frame index to its track offset, and a track offset back to a
//!   frame index
//! - **Layout** (`layout`): cumulative marker offsets, track extent, the
//!   draggable extent under pointer coercion, and pointer alignment
//! - **Drag** (`drag`): the stateful controller consuming signed pixel
//!   deltas and reporting derived-value changes
//! - **Types** (`types`): movement, pointer-selection, and coercion enums

pub mod convert;
pub mod drag;
pub mod layout;
pub mod types;

// Re-export commonly used items
pub use convert::{convert_range, index_for_offset, offset_for_index};
pub use drag::{DragController, DragValue};
pub use layout::{
    cumulative_offsets, draggable_extent, pointer_selection_shift, track_extent, TrackLayout,
};
pub use types::{CoercePointer, Movement, PointerSelection};
