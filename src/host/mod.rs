//=========================================================================
// Host Subsystem
//
// Bridges the embedding host (the page environment) with the widget's
// logic thread via MPSC.
//
// Architecture:
// ```text
//  Host Thread:                      Logic Thread:
//  ┌──────────────────────────┐     ┌────────────────────┐
//  │  Embedder callbacks      │     │  Orchestrator      │
//  │   ↓                      │     │                    │
//  │  HostPump                │     │  OrbController     │
//  │   ├─ push_scroll         │     │  ↓                 │
//  │   ├─ push_resize         │     │  FadeNavigator     │
//  │   └─ push_click          │     │  ↓                 │
//  │   ↓                      │     │  Surface           │
//  │  EventBuffer             │     └────────────────────┘
//  │   ├─ clicks: Vec<>       │              ↑
//  │   └─ scroll/resize: latest│             │
//  │   ↓ flush() per frame    │              │
//  │  MPSC Channel ───────────┼──────────────┘
//  └──────────────────────────┘     HostEvent
//
//  Frame Boundary: flush()
//    → All buffered events sent atomically as one FrameBatch
//    → Clicks keep arrival order; scroll/resize keep only the latest
//      sample (earlier values are superseded within the frame)
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **flush() = frame boundary**: the embedder calls it once per display
//   refresh, so the logic thread sees at most one coalesced batch per
//   host frame
// - **Graceful channel disconnect**: if the logic thread dies, the pump
//   logs a warning and drops the batch instead of panicking, so the rest
//   of the page keeps working
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::{debug, trace, warn};

//=== ViewportChange ======================================================

/// New viewport dimensions reported by the host on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    pub width: f32,
    pub height: f32,
    pub page_height: f32,
}

//=== FrameBatch ==========================================================

/// All host activity observed during one display frame.
///
/// Scroll and resize are continuous signals coalesced to their latest
/// sample; clicks are discrete and keep arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBatch {
    pub scroll: Option<f32>,
    pub resize: Option<ViewportChange>,
    pub clicks: Vec<usize>,
}

impl FrameBatch {
    /// True when the batch carries nothing.
    pub fn is_empty(&self) -> bool {
        self.scroll.is_none() && self.resize.is_none() && self.clicks.is_empty()
    }
}

//=== HostEvent ===========================================================

/// Messages sent from the host layer to the logic thread.
///
/// These are the only messages that cross the thread boundary.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Coalesced host activity for a single frame.
    ///
    /// Empty batches are NOT sent.
    Frame(FrameBatch),

    /// The widget is being torn down; the logic thread should terminate
    /// cleanly upon receiving this.
    Detached,
}

//=== HostError ===========================================================

/// Host-to-core communication errors.
#[derive(Debug)]
pub enum HostError {
    /// The logic thread is gone; the event channel is disconnected.
    Disconnected,
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Logic thread channel is disconnected"),
        }
    }
}

impl std::error::Error for HostError {}

//=== EventBuffer =========================================================

/// Accumulates host activity between frame boundaries.
///
/// Discrete events (clicks) are kept in order; continuous events (scroll,
/// resize) keep only the latest sample, matching how the logic thread
/// judges state against the newest measurement anyway.
#[derive(Debug, Default)]
pub(crate) struct EventBuffer {
    batch: FrameBatch,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll sample, superseding any earlier one this frame.
    pub fn push_scroll(&mut self, offset: f32) {
        self.batch.scroll = Some(offset);
    }

    /// Records new viewport dimensions, superseding earlier ones.
    pub fn push_resize(&mut self, change: ViewportChange) {
        self.batch.resize = Some(change);
    }

    /// Records a click on orb `index`, preserving arrival order.
    pub fn push_click(&mut self, index: usize) {
        self.batch.clicks.push(index);
    }

    /// Takes the buffered batch, or `None` if nothing accumulated.
    pub fn drain(&mut self) -> Option<FrameBatch> {
        if self.batch.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.batch))
    }
}

//=== HostPump ============================================================

/// Embedder-facing handle that feeds host signals to the logic thread.
///
/// The embedder wires its environment callbacks to the push methods and
/// calls [`HostPump::flush`] once per display frame. Dropping the pump
/// without [`HostPump::detach`] disconnects the channel, which also
/// terminates the logic thread cleanly.
pub struct HostPump {
    buffer: EventBuffer,
    sender: Sender<HostEvent>,
}

impl HostPump {
    /// Creates a pump over the given event sender.
    pub(crate) fn new(sender: Sender<HostEvent>) -> Self {
        debug!(target: "host", "Host pump initialized");
        Self {
            buffer: EventBuffer::new(),
            sender,
        }
    }

    //--- Event Intake -----------------------------------------------------

    /// Reports the current scroll offset.
    pub fn push_scroll(&mut self, offset: f32) {
        self.buffer.push_scroll(offset);
    }

    /// Reports new viewport dimensions.
    pub fn push_resize(&mut self, width: f32, height: f32, page_height: f32) {
        self.buffer.push_resize(ViewportChange {
            width,
            height,
            page_height,
        });
    }

    /// Reports a click on orb `index`.
    pub fn push_click(&mut self, index: usize) {
        self.buffer.push_click(index);
    }

    //--- flush() ----------------------------------------------------------
    //
    // Sends everything buffered since the last flush as one atomic batch.
    // Called by the embedder at each frame boundary. Empty buffers send
    // nothing. A disconnected channel drops the batch with a warning so
    // the host side never panics.
    //
    pub fn flush(&mut self) {
        if let Some(batch) = self.buffer.drain() {
            trace!(
                target: "host",
                "Flushing frame batch ({} clicks, scroll: {}, resize: {})",
                batch.clicks.len(),
                batch.scroll.is_some(),
                batch.resize.is_some()
            );

            if self.sender.send(HostEvent::Frame(batch)).is_err() {
                warn!(target: "host", "Channel disconnected, dropping frame batch");
            }
        }
    }

    //--- detach() ---------------------------------------------------------
    //
    // Tells the logic thread to terminate. Pending buffered events are
    // flushed first so the final frame is not lost.
    //
    pub fn detach(mut self) -> Result<(), HostError> {
        self.flush();
        self.sender
            .send(HostEvent::Detached)
            .map_err(|_| HostError::Disconnected)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    //=====================================================================
    // EventBuffer Tests
    //=====================================================================

    #[test]
    fn empty_buffer_drains_nothing() {
        let mut buffer = EventBuffer::new();
        assert_eq!(buffer.drain(), None);
    }

    #[test]
    fn scroll_samples_coalesce_to_latest() {
        let mut buffer = EventBuffer::new();
        buffer.push_scroll(10.0);
        buffer.push_scroll(200.0);
        buffer.push_scroll(150.0);

        let batch = buffer.drain().unwrap();
        assert_eq!(batch.scroll, Some(150.0));
    }

    #[test]
    fn resize_samples_coalesce_to_latest() {
        let mut buffer = EventBuffer::new();
        buffer.push_resize(ViewportChange {
            width: 800.0,
            height: 600.0,
            page_height: 600.0,
        });
        buffer.push_resize(ViewportChange {
            width: 1920.0,
            height: 1080.0,
            page_height: 4000.0,
        });

        let batch = buffer.drain().unwrap();
        assert_eq!(batch.resize.unwrap().width, 1920.0);
    }

    #[test]
    fn clicks_keep_arrival_order() {
        let mut buffer = EventBuffer::new();
        buffer.push_click(3);
        buffer.push_click(0);
        buffer.push_click(3);

        let batch = buffer.drain().unwrap();
        assert_eq!(batch.clicks, vec![3, 0, 3]);
    }

    #[test]
    fn drain_resets_the_buffer() {
        let mut buffer = EventBuffer::new();
        buffer.push_scroll(10.0);
        buffer.push_click(1);

        assert!(buffer.drain().is_some());
        assert_eq!(buffer.drain(), None);
    }

    //=====================================================================
    // HostPump Tests
    //=====================================================================

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut pump = HostPump::new(tx);

        pump.flush();

        assert!(rx.try_recv().is_err(), "No batch should be sent when empty");
    }

    #[test]
    fn flush_sends_one_coalesced_batch() {
        let (tx, rx) = unbounded();
        let mut pump = HostPump::new(tx);

        pump.push_scroll(50.0);
        pump.push_scroll(400.0);
        pump.push_click(2);
        pump.flush();

        match rx.try_recv() {
            Ok(HostEvent::Frame(batch)) => {
                assert_eq!(batch.scroll, Some(400.0));
                assert_eq!(batch.clicks, vec![2]);
                assert_eq!(batch.resize, None);
            }
            other => panic!("Expected Frame event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "Exactly one batch per flush");
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut pump = HostPump::new(tx);
        pump.push_click(0);

        drop(rx);

        // Should not panic, just log a warning
        pump.flush();
    }

    #[test]
    fn detach_flushes_then_signals() {
        let (tx, rx) = unbounded();
        let mut pump = HostPump::new(tx);
        pump.push_scroll(500.0);

        pump.detach().unwrap();

        assert!(matches!(rx.try_recv(), Ok(HostEvent::Frame(_))));
        assert!(matches!(rx.try_recv(), Ok(HostEvent::Detached)));
    }

    #[test]
    fn detach_on_dead_channel_reports_disconnect() {
        let (tx, rx) = unbounded();
        let pump = HostPump::new(tx);
        drop(rx);

        assert!(matches!(pump.detach(), Err(HostError::Disconnected)));
    }

    #[test]
    fn host_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<HostError>();
    }
}
