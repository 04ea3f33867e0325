//! Configuration enums shared across the engine

/// Whether the bar drives a float value or a frame index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    /// Freely-valued: the driven value is a float, raw pixels or mapped into
    /// a caller range
    #[default]
    Continuous,
    /// Index-snapped: the driven value is an index into the marker list
    Discrete,
}

/// Which point of the pointer aligns with the track's reference offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSelection {
    /// Left edge of the pointer
    Left,
    /// Midpoint of the pointer (default)
    #[default]
    Center,
    /// Right edge of the pointer
    Right,
}

/// Whether the pointer's own width is excluded from the draggable extent
///
/// A coerced pointer can never overhang the track edge; marker offsets are
/// not shifted in that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercePointer {
    /// Pointer width is subtracted from the draggable extent
    Coerced,
    /// Full track extent is draggable (default)
    #[default]
    NotCoerced,
}
