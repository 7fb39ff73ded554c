//=========================================================================
// Drift Motion
//
// Floating-phase motion math for a single orb.
//
// Each floating orb drifts on a slow two-axis sine path around a fixed
// anchor point. Amplitudes, angular speed, and frequency factors are drawn
// once when the orb enters the floating phase, so each orb wanders on its
// own non-repeating-looking track.
//
// Responsibilities:
// - Randomize per-orb motion parameters and initial anchors
// - Advance the drift phase one frame at a time
// - Clamp every effective position into the viewport bounds, so an orb
//   can never escape the visible area no matter how many frames run
//
//=========================================================================

//=== External Crates =====================================================

use rand::Rng;

//=== Internal Modules ====================================================

use crate::core::viewport::Viewport;

//=== Constants ===========================================================

/// Distance kept between a floating orb and each viewport edge.
pub const EDGE_MARGIN: f32 = 24.0;

/// Nominal milliseconds per frame; the drift phase advances by
/// `speed * NOMINAL_FRAME_MS` each tick.
const NOMINAL_FRAME_MS: f32 = 16.0;

/// Diameter of orb `index`. Orbs shrink slightly down the sequence for
/// visual variety, with a floor so late indices stay clickable.
pub fn orb_size(index: usize) -> f32 {
    (150.0 - 6.0 * index as f32).max(24.0)
}

//=== DriftBounds =========================================================

/// Axis-aligned region a floating orb's top-left corner must stay inside.
///
/// Derived from the viewport and the orb's own size. A viewport too small
/// to hold the orb collapses the region to its minimum corner instead of
/// producing an inverted range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl DriftBounds {
    /// Computes the floating region for orb `index` in `viewport`.
    pub fn for_orb(viewport: &Viewport, index: usize) -> Self {
        let size = orb_size(index);
        let max_x = (viewport.width - EDGE_MARGIN - size).max(EDGE_MARGIN);
        let max_y = (viewport.height - EDGE_MARGIN - size).max(EDGE_MARGIN);

        Self {
            min_x: EDGE_MARGIN,
            min_y: EDGE_MARGIN,
            max_x,
            max_y,
        }
    }

    /// Clamps a point into the region.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(self.min_x, self.max_x),
            y.clamp(self.min_y, self.max_y),
        )
    }

    /// Whether a point lies inside the region (inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

//=== DriftParams =========================================================

/// Private motion parameters of one floating orb.
///
/// Drawn fresh every time the orb enters the floating phase. The phase
/// accumulator `t` is the only field that changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftParams {
    amplitude_x: f32,
    amplitude_y: f32,
    speed: f32,
    freq_x: f32,
    freq_y: f32,
    t: f32,
}

impl DriftParams {
    //--- randomized() -----------------------------------------------------
    //
    // Draws a fresh parameter set. Ranges produce gentle motion: a few
    // pixels of sway per axis, one slow cycle every several seconds.
    //
    pub fn randomized<R: Rng>(rng: &mut R) -> Self {
        Self {
            amplitude_x: rng.gen_range(8.0..16.0),
            amplitude_y: rng.gen_range(6.0..16.0),
            speed: rng.gen_range(0.002..0.005),
            freq_x: rng.gen_range(0.8..1.3),
            freq_y: rng.gen_range(0.7..1.2),
            t: 0.0,
        }
    }

    //--- advance() --------------------------------------------------------
    //
    // Advances the drift by one frame and returns the new offset from the
    // anchor. The offset magnitude is bounded by the amplitudes; boundary
    // clamping against the viewport happens at the position level.
    //
    pub fn advance(&mut self) -> (f32, f32) {
        self.t += self.speed * NOMINAL_FRAME_MS;
        self.offset()
    }

    /// Current offset from the anchor without advancing.
    pub fn offset(&self) -> (f32, f32) {
        (
            (self.t * self.freq_x).cos() * self.amplitude_x,
            (self.t * self.freq_y).sin() * self.amplitude_y,
        )
    }
}

//=== Initial Placement ===================================================

/// Picks a random anchor on a loose ring around the viewport center,
/// clamped into `bounds`.
///
/// Ring radius scales with the smaller viewport dimension so the orbs
/// cluster around the hero region on any screen.
pub fn random_anchor<R: Rng>(rng: &mut R, viewport: &Viewport, bounds: &DriftBounds) -> (f32, f32) {
    let (center_x, center_y) = viewport.center();
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius = viewport.width.min(viewport.height) * 0.18 + rng.gen_range(0.0..40.0);

    bounds.clamp(
        center_x + angle.cos() * radius,
        center_y + angle.sin() * radius,
    )
}

//=========================================================================
// Unit Tests
//=========================================================================
