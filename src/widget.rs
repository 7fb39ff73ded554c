//=========================================================================
// Orb Widget
//
// Main entry point and coordinator for the widget.
//
// Architecture:
// ```text
//     WidgetBuilder  ──build()──>  OrbWidget  ──start()──>  WidgetHandle
//         │                           │                        │
//         ├─ with_fps()               └─ spawns logic thread   ├─ pump()
//         ├─ with_settle_fraction()      creates MPSC channel  └─ shutdown()
//         └─ with_targets()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::fade::DEFAULT_FADE;
use crate::core::surface::Surface;
use crate::core::target::{default_pages, NavigationTarget};
use crate::core::viewport::{Viewport, DEFAULT_SETTLE_FRACTION};
use crate::core::ControllerOrchestrator;
use crate::host::{HostEvent, HostPump};

//=== WidgetBuilder =======================================================

/// Builder for configuring and constructing an [`OrbWidget`].
///
/// Provides a fluent API for setting widget parameters before
/// construction.
///
/// # Default Values
///
/// - **FPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 event batches
/// - **Settle fraction**: 0.45 of viewport height
/// - **Fade**: 350 ms before navigation
/// - **Targets**: the canonical six pages
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use orb_nav::core::surface::{Surface, SurfaceError};
/// use orb_nav::core::viewport::Viewport;
/// use orb_nav::WidgetBuilder;
///
/// # struct PageSurface;
/// # impl Surface for PageSurface {
/// #     fn mount_orb(&mut self, _: usize, _: &str) -> Result<(), SurfaceError> { Ok(()) }
/// #     fn place_orb(&mut self, _: usize, _: f32, _: f32) {}
/// #     fn navigate(&mut self, _: &str) {}
/// # }
/// let handle = WidgetBuilder::new()
///     .build()
///     .start(PageSurface, Viewport::new(1280.0, 800.0));
/// ```
///
/// Advanced configuration:
/// ```no_run
/// # use orb_nav::core::surface::{Surface, SurfaceError};
/// # use orb_nav::core::target::NavigationTarget;
/// # use orb_nav::core::viewport::Viewport;
/// # use orb_nav::WidgetBuilder;
/// # use std::time::Duration;
/// # struct PageSurface;
/// # impl Surface for PageSurface {
/// #     fn mount_orb(&mut self, _: usize, _: &str) -> Result<(), SurfaceError> { Ok(()) }
/// #     fn place_orb(&mut self, _: usize, _: f32, _: f32) {}
/// #     fn navigate(&mut self, _: &str) {}
/// # }
/// let handle = WidgetBuilder::new()
///     .with_fps(120.0)
///     .with_settle_fraction(0.5)
///     .with_fade(Duration::from_millis(200))
///     .with_targets(vec![
///         NavigationTarget::new("Home", "index.html"),
///         NavigationTarget::new("Blog", "blog.html"),
///     ])
///     .build()
///     .start(PageSurface, Viewport::new(1280.0, 800.0));
/// ```
pub struct WidgetBuilder {
    fps: f64,
    channel_capacity: usize,
    settle_fraction: f32,
    fade: Duration,
    seed: Option<u64>,
    targets: Vec<NavigationTarget>,
}

impl WidgetBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            channel_capacity: 128,
            settle_fraction: DEFAULT_SETTLE_FRACTION,
            fade: DEFAULT_FADE,
            seed: None,
            targets: default_pages(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Sets the channel capacity for host → logic communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the scroll threshold as a fraction of the viewport height.
    ///
    /// Default: 0.45
    ///
    /// # Panics
    ///
    /// Panics if the fraction is not in `(0, 1]`.
    pub fn with_settle_fraction(mut self, fraction: f32) -> Self {
        assert!(
            fraction > 0.0 && fraction <= 1.0,
            "Settle fraction must be in (0, 1], got {}",
            fraction
        );
        self.settle_fraction = fraction;
        self
    }

    /// Sets the fade length played before a navigation fires.
    ///
    /// Default: 350 ms
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Seeds orb placement and drift for deterministic motion.
    ///
    /// Unseeded widgets draw from OS entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the navigation targets.
    ///
    /// Default: the six canonical pages. Any length works; fewer targets
    /// mean fewer orbs and shorter rails.
    pub fn with_targets(mut self, targets: Vec<NavigationTarget>) -> Self {
        self.targets = targets;
        self
    }

    /// Builds the widget instance.
    pub fn build(self) -> OrbWidget {
        info!(
            "Building widget ({} targets, FPS: {}, settle: {})",
            self.targets.len(),
            self.fps,
            self.settle_fraction
        );

        OrbWidget {
            fps: self.fps,
            channel_capacity: self.channel_capacity,
            settle_fraction: self.settle_fraction,
            fade: self.fade,
            seed: self.seed,
            targets: self.targets,
        }
    }
}

impl Default for WidgetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== OrbWidget ===========================================================

/// Configured orb widget, ready to start.
///
/// Create via [`WidgetBuilder`]. Starting the widget spawns the logic
/// thread and hands back a [`WidgetHandle`] through which the embedder
/// feeds viewport signals.
pub struct OrbWidget {
    fps: f64,
    channel_capacity: usize,
    settle_fraction: f32,
    fade: Duration,
    seed: Option<u64>,
    targets: Vec<NavigationTarget>,
}

impl OrbWidget {
    //--- Execution --------------------------------------------------------

    /// Starts the widget over the given presentation surface.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the MPSC channel for host → logic communication
    /// 2. Spawns the logic thread ticking at the configured FPS; the
    ///    thread mounts the orbs and runs the phase machine
    /// 3. Returns a [`WidgetHandle`] wrapping the host pump and the
    ///    thread handle
    ///
    /// The widget itself never blocks the caller; the embedder drives it
    /// by pushing events and flushing once per display frame.
    pub fn start<S: Surface + 'static>(self, surface: S, viewport: Viewport) -> WidgetHandle {
        info!("Starting widget runtime (FPS: {})", self.fps);

        let (tx, rx): (Sender<HostEvent>, Receiver<HostEvent>) = bounded(self.channel_capacity);

        let orchestrator = ControllerOrchestrator::new(
            self.targets,
            viewport,
            self.settle_fraction,
            self.fade,
            self.fps,
            self.seed,
            surface,
        );
        let core_handle = orchestrator.spawn_core_thread(rx, self.fps);
        info!("Logic thread spawned");

        WidgetHandle {
            pump: HostPump::new(tx),
            core_handle,
        }
    }
}

//=== WidgetHandle ========================================================

/// Running widget: the host pump plus the logic thread handle.
///
/// Lives on the host side for the page's lifetime. Shutting down is
/// optional; dropping the handle disconnects the channel, which also
/// terminates the logic thread.
pub struct WidgetHandle {
    pump: HostPump,
    core_handle: thread::JoinHandle<()>,
}

impl WidgetHandle {
    /// The pump used to feed scroll, resize, and click events.
    pub fn pump(&mut self) -> &mut HostPump {
        &mut self.pump
    }

    /// Detaches the widget and waits for the logic thread to terminate.
    pub fn shutdown(self) {
        if self.pump.detach().is_err() {
            error!("Logic thread was already gone at shutdown");
        }

        match self.core_handle.join() {
            Ok(()) => info!("Logic thread terminated cleanly"),
            Err(e) => error!("Logic thread panicked: {:?}", e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::SurfaceError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct NullSurface {
        navigations: Arc<Mutex<Vec<String>>>,
    }

    impl Surface for NullSurface {
        fn mount_orb(&mut self, _index: usize, _label: &str) -> Result<(), SurfaceError> {
            Ok(())
        }

        fn place_orb(&mut self, _index: usize, _x: f32, _y: f32) {}

        fn navigate(&mut self, href: &str) {
            self.navigations.lock().unwrap().push(href.to_string());
        }
    }

    //=====================================================================
    // WidgetBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = WidgetBuilder::new();
        assert_eq!(builder.fps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.settle_fraction, DEFAULT_SETTLE_FRACTION);
        assert_eq!(builder.fade, DEFAULT_FADE);
        assert_eq!(builder.targets.len(), 6);
        assert!(builder.seed.is_none());
    }

    #[test]
    fn builder_with_fps() {
        let builder = WidgetBuilder::new().with_fps(120.0);
        assert_eq!(builder.fps, 120.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_zero() {
        WidgetBuilder::new().with_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_negative() {
        WidgetBuilder::new().with_fps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        WidgetBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_settle_fraction() {
        let builder = WidgetBuilder::new().with_settle_fraction(0.6);
        assert_eq!(builder.settle_fraction, 0.6);
    }

    #[test]
    #[should_panic(expected = "Settle fraction must be in (0, 1]")]
    fn builder_settle_fraction_panics_on_zero() {
        WidgetBuilder::new().with_settle_fraction(0.0);
    }

    #[test]
    #[should_panic(expected = "Settle fraction must be in (0, 1]")]
    fn builder_settle_fraction_panics_above_one() {
        WidgetBuilder::new().with_settle_fraction(1.5);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let widget = WidgetBuilder::new()
            .with_fps(120.0)
            .with_channel_capacity(256)
            .with_settle_fraction(0.5)
            .with_fade(Duration::from_millis(100))
            .with_seed(7)
            .build();

        assert_eq!(widget.fps, 120.0);
        assert_eq!(widget.channel_capacity, 256);
        assert_eq!(widget.settle_fraction, 0.5);
        assert_eq!(widget.fade, Duration::from_millis(100));
        assert_eq!(widget.seed, Some(7));
    }

    #[test]
    fn builder_with_custom_targets() {
        let widget = WidgetBuilder::new()
            .with_targets(vec![NavigationTarget::new("Home", "index.html")])
            .build();
        assert_eq!(widget.targets.len(), 1);
    }

    //=====================================================================
    // Widget Lifecycle Tests
    //=====================================================================

    #[test]
    fn start_and_shutdown_round_trip() {
        let handle = WidgetBuilder::new()
            .with_seed(1)
            .build()
            .start(NullSurface::default(), Viewport::new(1280.0, 800.0));

        handle.shutdown();
    }

    #[test]
    fn dropping_handle_terminates_logic_thread() {
        let handle = WidgetBuilder::new()
            .with_seed(1)
            .build()
            .start(NullSurface::default(), Viewport::new(1280.0, 800.0));

        // Dropping disconnects the channel; the thread must not linger.
        let WidgetHandle { pump, core_handle } = handle;
        drop(pump);
        core_handle.join().expect("logic thread should exit");
    }

    #[test]
    fn click_through_pump_navigates_after_fade() {
        let surface = NullSurface::default();
        let navigations = surface.navigations.clone();

        let mut handle = WidgetBuilder::new()
            .with_seed(1)
            .with_fps(240.0)
            .with_fade(Duration::from_millis(10))
            .build()
            .start(surface, Viewport::new(1280.0, 800.0));

        handle.pump().push_click(2);
        handle.pump().flush();

        // Give the logic thread time to play the fade and navigate.
        thread::sleep(Duration::from_millis(300));
        handle.shutdown();

        assert_eq!(
            navigations.lock().unwrap().as_slice(),
            ["interests.html".to_string()]
        );
    }
}
