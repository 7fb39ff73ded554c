//=========================================================================
// Viewport
//
// Snapshot of the host's visible area and scroll position.
//
// Responsibilities:
// - Carry the measurements every layout decision depends on
// - Sanitize garbage measurements (zero, negative, non-finite) so no
//   NaN or negative coordinate ever reaches the motion math
// - Compute the scroll threshold that flips the orbs between phases
//
//=========================================================================

//=== Constants ===========================================================

/// Fraction of viewport height scrolled past before orbs settle.
pub const DEFAULT_SETTLE_FRACTION: f32 = 0.45;

//=== Viewport ============================================================

/// Host viewport measurements, in pixels.
///
/// `page_height` is the full scrollable document height; it is never less
/// than `height` after sanitization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
    pub page_height: f32,
}

impl Viewport {
    /// Creates a viewport with the given dimensions, unscrolled, with the
    /// page exactly one screen tall. Measurements are sanitized.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
            page_height: height,
        }
        .sanitized()
    }

    //--- sanitized() ------------------------------------------------------
    //
    // Clamps every field into a usable range. Non-finite values collapse
    // to zero, negatives clamp to zero, and the page is at least one
    // viewport tall.
    //
    pub fn sanitized(self) -> Self {
        let width = finite_or_zero(self.width).max(0.0);
        let height = finite_or_zero(self.height).max(0.0);
        let scroll_y = finite_or_zero(self.scroll_y).max(0.0);
        let page_height = finite_or_zero(self.page_height).max(height);

        Self {
            width,
            height,
            scroll_y,
            page_height,
        }
    }

    /// Scroll offset beyond which orbs settle to the rails.
    pub fn settle_threshold(&self, fraction: f32) -> f32 {
        self.height * fraction
    }

    /// Center of the visible area, the anchor for initial orb placement.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_viewport_is_unscrolled() {
        let vp = Viewport::new(1280.0, 800.0);
        assert_eq!(vp.scroll_y, 0.0);
        assert_eq!(vp.page_height, 800.0);
    }

    #[test]
    fn sanitized_clamps_negative_dimensions() {
        let vp = Viewport {
            width: -100.0,
            height: -50.0,
            scroll_y: -2.0,
            page_height: -10.0,
        }
        .sanitized();

        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
        assert_eq!(vp.scroll_y, 0.0);
        assert_eq!(vp.page_height, 0.0);
    }

    #[test]
    fn sanitized_collapses_non_finite_values() {
        let vp = Viewport {
            width: f32::NAN,
            height: f32::INFINITY,
            scroll_y: f32::NEG_INFINITY,
            page_height: f32::NAN,
        }
        .sanitized();

        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
        assert_eq!(vp.scroll_y, 0.0);
        assert_eq!(vp.page_height, 0.0);
    }

    #[test]
    fn sanitized_page_is_at_least_one_screen() {
        let vp = Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: 0.0,
            page_height: 300.0,
        }
        .sanitized();

        assert_eq!(vp.page_height, 800.0);
    }

    #[test]
    fn settle_threshold_scales_with_height() {
        let vp = Viewport::new(1280.0, 1000.0);
        assert_eq!(vp.settle_threshold(DEFAULT_SETTLE_FRACTION), 450.0);
        assert_eq!(vp.settle_threshold(0.5), 500.0);
    }

    #[test]
    fn center_is_half_dimensions() {
        let vp = Viewport::new(1280.0, 800.0);
        assert_eq!(vp.center(), (640.0, 400.0));
    }
}
