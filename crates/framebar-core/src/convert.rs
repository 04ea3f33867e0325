//! Pure conversions between value-space and pixel-space
//!
//! These are the only places where a semantic value (a float in a caller
//! range, or a frame index) meets a track offset in pixels. Everything here
//! is total over its documented input contract and keeps no state.

use std::ops::RangeInclusive;

/// Linearly remap `value` from `source` into `target`.
///
/// `source` must be non-degenerate: a zero-width source range is a caller
/// contract violation and the result is unspecified.
pub fn convert_range(
    value: f32,
    source: RangeInclusive<f32>,
    target: RangeInclusive<f32>,
) -> f32 {
    let (src_start, src_end) = (*source.start(), *source.end());
    let (dst_start, dst_end) = (*target.start(), *target.end());

    (value - src_start) / (src_end - src_start) * (dst_end - dst_start) + dst_start
}

/// Track offset of the pointer anchor for a frame index.
///
/// The sum of all marker widths before `index`, plus half the width of the
/// marker at `index` (the pointer centers on the selected marker's midpoint).
/// An out-of-bounds index falls through to the full cumulative sum.
pub fn offset_for_index(index: usize, widths: &[f32]) -> f32 {
    let mut offset = 0.0;
    for (i, width) in widths.iter().enumerate() {
        if i == index {
            return offset + width / 2.0;
        }
        offset += width;
    }
    offset
}

/// Frame index for a track offset.
///
/// The largest index whose start offset is at or before `offset`; `0` when
/// the offset precedes the first marker. An offset exactly on a marker
/// boundary resolves to the later marker.
pub fn index_for_offset(offset: f32, cumulative: &[f32]) -> usize {
    cumulative
        .iter()
        .rposition(|&start| start <= offset)
        .unwrap_or(0)
}
