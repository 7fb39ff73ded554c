//=========================================================================
// Orb System
//=========================================================================
//
// The orb motion model: drift math, rail geometry, and the controller
// that flips the whole set between phases.
//
// Architecture:
//   OrbController (controller.rs)
//     ├─ DriftParams / DriftBounds (drift.rs)   — floating phase
//     └─ RailLayout / RailSide (layout.rs)      — settled phase
//
// Flow:
//   observe_scroll() → settle()/unsettle() → step_frame() per tick
//
//=========================================================================

//=== Module Declarations =================================================

mod controller;
mod drift;
mod layout;

//=== Public API ==========================================================

pub use controller::{OrbController, Phase};
pub use drift::{orb_size, random_anchor, DriftBounds, DriftParams, EDGE_MARGIN};
pub use layout::{rail_side, rail_slot, RailLayout, RailSide};
