//=========================================================================
// Surface
//=========================================================================
//
// Presentation contract between the orb model and the host page.
//
// The logic thread projects orb state through this trait: element
// creation at startup, position and drift-offset mutation per frame,
// rail styling on phase changes, and the fade/navigate pair on click.
// The model never touches presentation objects directly, so the state
// machine and the motion math test without any real display.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::orbs::RailSide;

//=== SurfaceError ========================================================

/// Presentation-layer setup failures.
///
/// Fatal to widget setup only: the orchestrator aborts its loop and the
/// rest of the page is untouched.
#[derive(Debug)]
pub enum SurfaceError {
    /// The designated orb container does not exist.
    MissingContainer,

    /// An orb element could not be created.
    Mount(String),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingContainer => write!(f, "Orb container is missing"),
            Self::Mount(e) => write!(f, "Orb mount failed: {}", e),
        }
    }
}

impl std::error::Error for SurfaceError {}

//=== Surface Trait =======================================================

/// Receives presentation commands from the logic thread.
///
/// Implementations are host-specific (a DOM bridge, a recording stub in
/// tests). Only `mount_orb`, `place_orb`, and `navigate` are required;
/// the rest default to no-ops for hosts that do not style rails or
/// animate fades.
///
/// # Minimal Implementation
///
/// ```rust
/// use orb_nav::core::surface::{Surface, SurfaceError};
///
/// struct Console;
///
/// impl Surface for Console {
///     fn mount_orb(&mut self, index: usize, label: &str) -> Result<(), SurfaceError> {
///         println!("orb {} = {}", index, label);
///         Ok(())
///     }
///     fn place_orb(&mut self, index: usize, x: f32, y: f32) {
///         println!("orb {} at ({}, {})", index, x, y);
///     }
///     fn navigate(&mut self, href: &str) {
///         println!("→ {}", href);
///     }
/// }
/// ```
pub trait Surface: Send {
    /// Creates the visual element for orb `index`, labeled with its
    /// display name. Called once per orb at startup.
    fn mount_orb(&mut self, index: usize, label: &str) -> Result<(), SurfaceError>;

    /// Sets the absolute anchor position of orb `index`.
    fn place_orb(&mut self, index: usize, x: f32, y: f32);

    /// Sets the per-frame drift offset of orb `index` relative to its
    /// anchor. Default implementation ignores drift.
    fn shift_orb(&mut self, _index: usize, _dx: f32, _dy: f32) {}

    /// Marks orb `index` as settled on `side` (rail styling).
    fn set_rail(&mut self, _index: usize, _side: RailSide) {}

    /// Clears rail styling from orb `index` when it returns to floating.
    fn clear_rail(&mut self, _index: usize) {}

    /// Starts the whole-page fade that precedes a navigation.
    fn begin_fade(&mut self, _duration: Duration) {}

    /// Performs the page navigation to `href`.
    fn navigate(&mut self, href: &str);
}
