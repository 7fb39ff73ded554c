//=========================================================================
// Fade Navigator
//=========================================================================
//
// Deferred navigation behind a page fade.
//
// A click starts a short whole-page fade; the navigation request fires
// only once the fade has had time to play. Modeled as a pending record
// with a tick countdown, processed at tick boundaries by the
// orchestrator. A second click while a fade is pending replaces the
// pending destination (latest wins).
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Constants ===========================================================

/// Default fade length before navigation.
pub const DEFAULT_FADE: Duration = Duration::from_millis(350);

//=== FadeNavigator =======================================================

/// Holds at most one pending navigation and counts it down in ticks.
pub struct FadeNavigator {
    ticks_per_fade: u32,
    pending: Option<PendingNav>,
}

struct PendingNav {
    href: String,
    ticks_left: u32,
}

impl FadeNavigator {
    /// Creates a navigator that spreads `fade` over ticks at `fps`.
    ///
    /// The countdown is always at least one tick, so the fade is visible
    /// even at very low tick rates or a zero duration.
    pub fn new(fade: Duration, fps: f64) -> Self {
        let ticks = (fade.as_secs_f64() * fps).ceil() as u32;
        Self {
            ticks_per_fade: ticks.max(1),
            pending: None,
        }
    }

    /// Starts (or restarts) the countdown toward `href`.
    pub fn begin(&mut self, href: impl Into<String>) {
        let href = href.into();
        if let Some(prev) = &self.pending {
            debug!(
                target: "core",
                "Replacing pending navigation to {} with {}",
                prev.href, href
            );
        }
        self.pending = Some(PendingNav {
            href,
            ticks_left: self.ticks_per_fade,
        });
    }

    /// Whether a navigation is currently counting down.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    //--- tick() -----------------------------------------------------------
    //
    // Advances the countdown by one tick. Returns the destination exactly
    // once, on the tick the countdown expires.
    //
    pub fn tick(&mut self) -> Option<String> {
        let pending = self.pending.as_mut()?;
        pending.ticks_left -= 1;
        if pending.ticks_left == 0 {
            let fired = self.pending.take()?;
            debug!(target: "core", "Fade complete, navigating to {}", fired.href);
            return Some(fired.href);
        }
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
