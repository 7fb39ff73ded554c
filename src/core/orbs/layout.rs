//=========================================================================
// Rail Layout
//
// Settled-phase geometry: where each orb rests along the left and right
// viewport edges.
//
// Side assignment is deterministic from the orb's index: the first half
// of the sequence takes the left rail, the remainder the right. Within a
// rail, orbs stack top to bottom in index order with a viewport-dependent
// gap.
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::orbs::drift::orb_size;
use crate::core::viewport::Viewport;

//=== Constants ===========================================================

/// Horizontal inset of a rail from its viewport edge.
const RAIL_INSET: f32 = 24.0;

/// Hard horizontal clamp applied to every slot (narrow viewports).
const SLOT_CLAMP_X: f32 = 8.0;

/// Vertical clamp keeping slots inside the scrolled page.
const SLOT_CLAMP_Y: f32 = 20.0;

/// Upper bound on the vertical gap between slots on one rail.
const MAX_SLOT_GAP: f32 = 120.0;

//=== RailSide ============================================================

/// Which vertical rail a settled orb belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RailSide {
    Left,
    Right,
}

/// Rail side of orb `index` in a sequence of `count` orbs.
///
/// The first `ceil(count / 2)` orbs go left; for the canonical six this
/// puts indices 0..=2 on the left and 3..=5 on the right.
pub fn rail_side(index: usize, count: usize) -> RailSide {
    if index < left_count(count) {
        RailSide::Left
    } else {
        RailSide::Right
    }
}

/// Slot position of orb `index` within its own rail, counted from the top.
pub fn rail_slot(index: usize, count: usize) -> usize {
    let left = left_count(count);
    if index < left {
        index
    } else {
        index - left
    }
}

fn left_count(count: usize) -> usize {
    (count + 1) / 2
}

//=== RailLayout ==========================================================

/// Slot geometry for the current viewport.
///
/// Recomputed on every settle and resize; slot positions depend on the
/// viewport dimensions and the current scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct RailLayout {
    viewport: Viewport,
}

impl RailLayout {
    /// Builds the layout for a (sanitized) viewport snapshot.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: viewport.sanitized(),
        }
    }

    //--- slot_position() --------------------------------------------------
    //
    // Resting position of orb `index` among `count` orbs: x from the rail
    // side, y from the slot number. The first slot sits a quarter screen
    // below the current scroll position, and every slot is clamped into
    // the page so no orb rests off-document.
    //
    pub fn slot_position(&self, index: usize, count: usize) -> (f32, f32) {
        let vp = &self.viewport;
        let size = orb_size(index);

        let gap = MAX_SLOT_GAP.min(vp.height / 6.0);
        let start_y = vp.scroll_y + vp.height * 0.25;
        let raw_y = start_y + rail_slot(index, count) as f32 * gap;

        let raw_x = match rail_side(index, count) {
            RailSide::Left => RAIL_INSET,
            RailSide::Right => vp.width - RAIL_INSET - size,
        };

        let max_x = (vp.width - size - SLOT_CLAMP_X).max(SLOT_CLAMP_X);
        let min_y = vp.scroll_y + SLOT_CLAMP_Y;
        let max_y = (vp.page_height - size - SLOT_CLAMP_Y).max(min_y);

        (raw_x.clamp(SLOT_CLAMP_X, max_x), raw_y.clamp(min_y, max_y))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_viewport() -> Viewport {
        Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: 600.0,
            page_height: 3000.0,
        }
        .sanitized()
    }

    //=====================================================================
    // Side Assignment Tests
    //=====================================================================

    #[test]
    fn six_orbs_split_three_and_three() {
        for index in 0..3 {
            assert_eq!(rail_side(index, 6), RailSide::Left, "index {}", index);
        }
        for index in 3..6 {
            assert_eq!(rail_side(index, 6), RailSide::Right, "index {}", index);
        }
    }

    #[test]
    fn odd_count_favors_left() {
        assert_eq!(rail_side(0, 5), RailSide::Left);
        assert_eq!(rail_side(2, 5), RailSide::Left);
        assert_eq!(rail_side(3, 5), RailSide::Right);
        assert_eq!(rail_side(4, 5), RailSide::Right);
    }

    #[test]
    fn single_orb_goes_left() {
        assert_eq!(rail_side(0, 1), RailSide::Left);
    }

    #[test]
    fn slots_restart_per_rail() {
        assert_eq!(rail_slot(0, 6), 0);
        assert_eq!(rail_slot(2, 6), 2);
        assert_eq!(rail_slot(3, 6), 0);
        assert_eq!(rail_slot(5, 6), 2);
    }

    //=====================================================================
    // Slot Geometry Tests
    //=====================================================================

    #[test]
    fn left_slots_sit_at_rail_inset() {
        let layout = RailLayout::new(scrolled_viewport());
        let (x, _) = layout.slot_position(0, 6);
        assert_eq!(x, 24.0);
    }

    #[test]
    fn right_slots_account_for_orb_size() {
        let layout = RailLayout::new(scrolled_viewport());
        let (x, _) = layout.slot_position(3, 6);
        assert_eq!(x, 1280.0 - 24.0 - orb_size(3));
    }

    #[test]
    fn slots_stack_down_by_gap() {
        let layout = RailLayout::new(scrolled_viewport());
        let gap = 120.0_f32.min(800.0 / 6.0); // the 120 cap wins here

        let (_, y0) = layout.slot_position(0, 6);
        let (_, y1) = layout.slot_position(1, 6);
        let (_, y2) = layout.slot_position(2, 6);

        assert_eq!(y0, 600.0 + 800.0 * 0.25);
        assert!((y1 - y0 - gap).abs() < 1e-3);
        assert!((y2 - y1 - gap).abs() < 1e-3);
    }

    #[test]
    fn opposite_rails_share_slot_heights() {
        let layout = RailLayout::new(scrolled_viewport());
        let (_, left_y) = layout.slot_position(0, 6);
        let (_, right_y) = layout.slot_position(3, 6);
        assert_eq!(left_y, right_y);
    }

    #[test]
    fn slots_clamp_to_page_bottom() {
        let vp = Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: 2200.0,
            page_height: 2400.0,
        }
        .sanitized();
        let layout = RailLayout::new(vp);

        for index in 0..6 {
            let (_, y) = layout.slot_position(index, 6);
            assert!(y + orb_size(index) + SLOT_CLAMP_Y <= vp.page_height + 1e-3);
            assert!(y >= vp.scroll_y + SLOT_CLAMP_Y);
        }
    }

    #[test]
    fn narrow_viewport_clamps_horizontally() {
        let layout = RailLayout::new(Viewport::new(100.0, 800.0));
        for index in 0..6 {
            let (x, _) = layout.slot_position(index, 6);
            assert!(x >= SLOT_CLAMP_X);
        }
    }

    #[test]
    fn zero_viewport_produces_finite_slots() {
        let layout = RailLayout::new(Viewport::new(0.0, 0.0));
        for index in 0..6 {
            let (x, y) = layout.slot_position(index, 6);
            assert!(x.is_finite() && y.is_finite());
            assert!(x >= 0.0 && y >= 0.0);
        }
    }
}
