//! Page scroll to section mapping.
//!
//! The page is treated as `N` stacked sections. A scroll offset is turned into
//! the pair of adjacent sections the camera travels between (`index`,
//! `index + 1`) and the progress `t` along that leg.

/// Largest `f32` strictly below 1.0; keeps `t` inside `[0, 1)` at the very
/// bottom of the page.
pub const BLEND_MAX: f32 = 1.0 - f32::EPSILON / 2.0;

/// Position along the section trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionBlend {
    /// First section of the current leg, in `[0, N-2]`.
    pub index: usize,
    /// Progress from `index` towards `index + 1`, in `[0, 1)`.
    pub t: f32,
}

/// Scrollable distance of a page: document height minus viewport height,
/// never negative.
#[inline]
pub fn total_scrollable(document_height: f32, viewport_height: f32) -> f32 {
    (document_height - viewport_height).max(0.0)
}

/// Normalized scroll progress in `[0, 1]`.
///
/// A page with nothing to scroll yields 0. Overscroll (rubber-banding) is
/// clamped, and non-finite input collapses to 0.
#[inline]
pub fn scroll_fraction(scroll_offset: f32, total_scrollable: f32) -> f32 {
    if total_scrollable <= 0.0 {
        return 0.0;
    }
    let fraction = scroll_offset / total_scrollable;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Map a scroll offset onto the leg between two adjacent sections.
///
/// `section_count` below 2 degenerates to `index 0, t 0`.
pub fn section_blend(
    scroll_offset: f32,
    total_scrollable: f32,
    section_count: usize,
) -> SectionBlend {
    let last_leg = section_count.saturating_sub(2);
    let legs = section_count.saturating_sub(1) as f32;
    let scaled = scroll_fraction(scroll_offset, total_scrollable) * legs;
    let index = (scaled.floor() as usize).min(last_leg);
    let t = (scaled - index as f32).clamp(0.0, BLEND_MAX);
    SectionBlend { index, t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_of_page_stays_on_last_leg() {
        let b = section_blend(300.0, 300.0, 4);
        assert_eq!(b.index, 2);
        assert!(b.t < 1.0);
        assert!(b.t > 0.999);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(section_blend(-40.0, 300.0, 4), SectionBlend { index: 0, t: 0.0 });
        assert_eq!(section_blend(900.0, 300.0, 4).index, 2);
    }

    #[test]
    fn nan_scroll_maps_to_top() {
        assert_eq!(section_blend(f32::NAN, 300.0, 4), SectionBlend::default());
    }
}
