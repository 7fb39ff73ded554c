//=========================================================================
// Orb Controller
//
// The floating/settled state machine for the whole orb set.
//
// Architecture:
//   OrbController
//     ├─ targets: Vec<NavigationTarget>   (fixed at construction)
//     ├─ orbs: Vec<Orb>                   (one record per target)
//     ├─ phase: Phase                     (global, shared by all orbs)
//     └─ rng: StdRng                      (drift parameter source)
//
// The phase is a single field, not a per-orb flag: every orb is in the
// same phase at all times, and a scroll sample flips them together. Each
// threshold crossing fires exactly one transition; repeated samples on
// the same side are no-ops.
//
// Mutation happens from exactly two call sites (the per-frame step and
// the scroll/resize observers), both driven by the single logic thread.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::orbs::drift::{random_anchor, DriftBounds, DriftParams};
use crate::core::orbs::layout::{rail_side, RailLayout, RailSide};
use crate::core::target::NavigationTarget;
use crate::core::viewport::Viewport;

//=== Phase ===============================================================

/// Global animation phase. Exactly one holds at any time, for all orbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Orbs drift around the hero region on per-orb sine tracks.
    Floating,

    /// Orbs rest at fixed slots along the left/right rails.
    Settled,
}

//=== Orb =================================================================

/// Per-orb mutable record: anchor position, motion parameters, and the
/// current drift offset. Created once at startup, lives for the page.
#[derive(Debug, Clone)]
struct Orb {
    anchor: (f32, f32),
    drift: DriftParams,
    offset: (f32, f32),
}

//=== OrbController =======================================================

/// Owns the orb set and routes scroll observations into phase transitions
/// and per-frame position updates.
///
/// The controller is pure model: it computes positions and resolves click
/// destinations but never touches the presentation layer. Projection onto
/// visual elements is the orchestrator's job.
pub struct OrbController {
    targets: Vec<NavigationTarget>,
    orbs: Vec<Orb>,
    phase: Phase,
    viewport: Viewport,
    settle_fraction: f32,
    rng: StdRng,
}

impl OrbController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller with one floating orb per target, each at a
    /// randomized in-bounds anchor around the viewport center.
    ///
    /// A `seed` makes placement and drift deterministic; `None` draws from
    /// OS entropy.
    pub fn new(
        targets: Vec<NavigationTarget>,
        viewport: Viewport,
        settle_fraction: f32,
        seed: Option<u64>,
    ) -> Self {
        let viewport = viewport.sanitized();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let orbs = (0..targets.len())
            .map(|index| {
                let bounds = DriftBounds::for_orb(&viewport, index);
                let drift = DriftParams::randomized(&mut rng);
                Orb {
                    anchor: random_anchor(&mut rng, &viewport, &bounds),
                    offset: drift.offset(),
                    drift,
                }
            })
            .collect();

        debug!(target: "core::orbs", "Controller created with {} orbs", targets.len());

        Self {
            targets,
            orbs,
            phase: Phase::Floating,
            viewport,
            settle_fraction,
            rng,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Number of orbs (same as the number of configured targets).
    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    /// True when no targets were configured.
    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// Current global phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest sanitized viewport snapshot.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Target behind orb `index`.
    pub fn target(&self, index: usize) -> Option<&NavigationTarget> {
        self.targets.get(index)
    }

    /// Rail side orb `index` settles to, deterministic from its index.
    pub fn side(&self, index: usize) -> RailSide {
        rail_side(index, self.orbs.len())
    }

    //--- position() -------------------------------------------------------
    //
    // Effective position of orb `index`. Floating positions are the anchor
    // plus drift offset, clamped into the orb's bounds; settled positions
    // are the rail slot the anchor was assigned on settle.
    //
    pub fn position(&self, index: usize) -> Option<(f32, f32)> {
        let orb = self.orbs.get(index)?;
        Some(match self.phase {
            Phase::Floating => {
                let bounds = DriftBounds::for_orb(&self.viewport, index);
                bounds.clamp(orb.anchor.0 + orb.offset.0, orb.anchor.1 + orb.offset.1)
            }
            Phase::Settled => orb.anchor,
        })
    }

    /// Anchor position of orb `index` (slot position while settled).
    pub fn anchor(&self, index: usize) -> Option<(f32, f32)> {
        self.orbs.get(index).map(|orb| orb.anchor)
    }

    /// Effective drift offset relative to the anchor; zero while settled.
    pub fn drift_offset(&self, index: usize) -> Option<(f32, f32)> {
        let (x, y) = self.position(index)?;
        let (ax, ay) = self.orbs[index].anchor;
        Some((x - ax, y - ay))
    }

    //--- observe_scroll() -------------------------------------------------
    //
    // Feeds a scroll sample into the state machine. Returns the new phase
    // when this sample crossed the threshold, `None` otherwise. Repeated
    // samples on the same side of the threshold never re-fire.
    //
    pub fn observe_scroll(&mut self, scroll_y: f32) -> Option<Phase> {
        self.viewport.scroll_y = scroll_y;
        self.viewport = self.viewport.sanitized();

        let threshold = self.viewport.settle_threshold(self.settle_fraction);
        match self.phase {
            Phase::Floating if self.viewport.scroll_y > threshold => {
                self.settle();
                Some(Phase::Settled)
            }
            Phase::Settled if self.viewport.scroll_y <= threshold => {
                self.unsettle();
                Some(Phase::Floating)
            }
            _ => None,
        }
    }

    //--- observe_resize() -------------------------------------------------
    //
    // Feeds new viewport dimensions. While settled, rail slots depend on
    // the dimensions, so every anchor is recomputed; returns `true` in
    // that case. While floating nothing moves now: the next frame's clamp
    // picks up the new bounds.
    //
    pub fn observe_resize(&mut self, width: f32, height: f32, page_height: f32) -> bool {
        self.viewport = Viewport {
            width,
            height,
            page_height,
            scroll_y: self.viewport.scroll_y,
        }
        .sanitized();

        match self.phase {
            Phase::Settled => {
                self.assign_slots();
                true
            }
            Phase::Floating => false,
        }
    }

    //--- step_frame() -----------------------------------------------------
    //
    // Advances every orb's drift by one frame. Checked against the phase
    // first, so a frame that lands after a settle simply does nothing
    // instead of needing cancellation. Returns whether motion occurred.
    //
    pub fn step_frame(&mut self) -> bool {
        if self.phase != Phase::Floating {
            return false;
        }
        for orb in &mut self.orbs {
            orb.offset = orb.drift.advance();
        }
        true
    }

    //--- click() ----------------------------------------------------------
    //
    // Resolves a click on orb `index` to its destination locator, with the
    // malformed-locator fallback applied. Out-of-range indices resolve to
    // nothing (the click is dropped, the widget keeps running).
    //
    pub fn click(&self, index: usize) -> Option<&str> {
        self.targets.get(index).map(NavigationTarget::locator)
    }

    //--- Internal Helpers -------------------------------------------------

    fn settle(&mut self) {
        debug!(
            target: "core::orbs",
            "Settling {} orbs at scroll {}",
            self.orbs.len(),
            self.viewport.scroll_y
        );
        self.phase = Phase::Settled;
        self.assign_slots();
    }

    fn unsettle(&mut self) {
        debug!(
            target: "core::orbs",
            "Unsettling {} orbs at scroll {}",
            self.orbs.len(),
            self.viewport.scroll_y
        );
        self.phase = Phase::Floating;

        for index in 0..self.orbs.len() {
            let bounds = DriftBounds::for_orb(&self.viewport, index);
            let drift = DriftParams::randomized(&mut self.rng);
            let orb = &mut self.orbs[index];
            orb.anchor = random_anchor(&mut self.rng, &self.viewport, &bounds);
            orb.offset = drift.offset();
            orb.drift = drift;
        }
    }

    fn assign_slots(&mut self) {
        let layout = RailLayout::new(self.viewport);
        let count = self.orbs.len();
        for (index, orb) in self.orbs.iter_mut().enumerate() {
            orb.anchor = layout.slot_position(index, count);
            orb.offset = (0.0, 0.0);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
