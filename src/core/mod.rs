//=========================================================================
// Controller Orchestrator
//
// Central coordinator for the orb widget running on the logic
// (non-host) thread.
//
// Responsibilities:
// - Receive and process host events (scroll, resize, clicks) via MPSC
// - Drive the orb state machine and per-frame drift at a fixed tick rate
// - Count down pending fades and issue navigation requests
// - Project model state onto the presentation Surface
//
// Notes:
// The orchestrator runs independently from the host layer. Events are
// drained and applied at the top of each tick, before the drift step, so
// no orb is ever observed mid-frame in a phase inconsistent with the
// latest scroll sample. Communication with the host occurs only through
// message passing (MPSC), ensuring isolation and thread safety.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{error, info, warn};

//=== Internal Modules ====================================================

use crate::host::{FrameBatch, HostEvent};
use fade::FadeNavigator;
use orbs::{OrbController, Phase};
use surface::{Surface, SurfaceError};
use target::NavigationTarget;
use viewport::Viewport;

pub mod fade;
pub mod orbs;
pub mod surface;
pub mod target;
pub mod viewport;

//=== TickControl =========================================================
//
// Defines control flow for the logic loop. Each tick's event collection
// can signal either to continue or terminate the loop.
//
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== ControllerOrchestrator ==============================================
//
// Owns the orb controller, the fade countdown, and the surface, and runs
// them as one fixed-rate loop. Constructed by the widget facade, consumed
// by spawn_core_thread.
//
pub(crate) struct ControllerOrchestrator<S: Surface> {
    controller: OrbController,
    fade: FadeNavigator,
    fade_duration: Duration,
    surface: S,
}

impl<S: Surface + 'static> ControllerOrchestrator<S> {
    //--- Construction -----------------------------------------------------
    //
    // Initializes the model but does not touch the surface yet; orbs are
    // mounted on the logic thread right before the loop starts.
    //
    pub fn new(
        targets: Vec<NavigationTarget>,
        viewport: Viewport,
        settle_fraction: f32,
        fade_duration: Duration,
        fps: f64,
        seed: Option<u64>,
        surface: S,
    ) -> Self {
        Self {
            controller: OrbController::new(targets, viewport, settle_fraction, seed),
            fade: FadeNavigator::new(fade_duration, fps),
            fade_duration,
            surface,
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking at a fixed rate (fps).
    //
    // Each tick:
    //  1. Collects host event batches for this frame
    //  2. Applies them (resize → scroll → clicks, in arrival order)
    //  3. Advances drift and the fade countdown
    //  4. Sleeps to maintain fixed pacing
    //  5. Exits cleanly on detach or channel disconnect
    //
    pub fn spawn_core_thread(
        mut self,
        receiver: Receiver<HostEvent>,
        fps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / fps);

        thread::spawn(move || {
            if let Err(e) = self.mount() {
                error!(target: "core", "Widget setup aborted: {}", e);
                return;
            }

            let mut batches: Vec<FrameBatch> = Vec::with_capacity(8);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather host events ---------------------------
                if let TickControl::Exit =
                    Self::collect_host_events(&receiver, &mut batches, frame_duration)
                {
                    info!(target: "core", "Logic thread exiting.");
                    break;
                }

                //--- Step 2: Apply transitions before the frame step ------
                for batch in batches.drain(..) {
                    self.apply_batch(batch);
                }

                //--- Step 3: Advance the frame ----------------------------
                self.tick_frame();

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- collect_host_events() -------------------------------------------
    //
    // Aggregates all event batches received from the host during this
    // frame. Returns a TickControl indicating whether to continue or exit.
    //
    fn collect_host_events(
        receiver: &Receiver<HostEvent>,
        batches: &mut Vec<FrameBatch>,
        frame_duration: Duration,
    ) -> TickControl {
        batches.clear();

        // Wait for at most one frame for the first event
        match receiver.recv_timeout(frame_duration) {
            Ok(HostEvent::Frame(batch)) => batches.push(batch),
            Ok(HostEvent::Detached) => return TickControl::Exit,
            Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
            Err(RecvTimeoutError::Timeout) => {}
        }

        // Drain additional batches queued during this frame
        while let Ok(event) = receiver.try_recv() {
            match event {
                HostEvent::Frame(batch) => batches.push(batch),
                HostEvent::Detached => return TickControl::Exit,
            }
        }

        TickControl::Continue
    }

    //--- mount() ----------------------------------------------------------
    //
    // Creates one visual element per target and places it at its initial
    // anchor. A surface failure here aborts widget setup only.
    //
    fn mount(&mut self) -> Result<(), SurfaceError> {
        for index in 0..self.controller.len() {
            let label = self
                .controller
                .target(index)
                .map(|t| t.name().to_string())
                .unwrap_or_default();
            self.surface.mount_orb(index, &label)?;
        }

        self.project_all();
        info!(target: "core", "Mounted {} orbs", self.controller.len());
        Ok(())
    }

    //--- apply_batch() ----------------------------------------------------
    //
    // Applies one host frame batch: dimensions first so the scroll sample
    // is judged against the latest threshold, then the scroll sample, then
    // clicks in arrival order.
    //
    fn apply_batch(&mut self, batch: FrameBatch) {
        if let Some(resize) = batch.resize {
            let reslotted =
                self.controller
                    .observe_resize(resize.width, resize.height, resize.page_height);
            if reslotted {
                self.project_all();
            }
        }

        if let Some(scroll_y) = batch.scroll {
            match self.controller.observe_scroll(scroll_y) {
                Some(Phase::Settled) => self.project_settled(),
                Some(Phase::Floating) => self.project_unsettled(),
                None => {}
            }
        }

        for index in batch.clicks {
            match self.controller.click(index) {
                Some(href) => {
                    let href = href.to_string();
                    self.surface.begin_fade(self.fade_duration);
                    self.fade.begin(href);
                }
                None => {
                    warn!(target: "core", "Click on unknown orb {} dropped", index);
                }
            }
        }
    }

    //--- tick_frame() -----------------------------------------------------
    //
    // One logic frame: advance drift (a no-op while settled), project the
    // fresh offsets, and fire a pending navigation if its fade is done.
    //
    fn tick_frame(&mut self) {
        if self.controller.step_frame() {
            for index in 0..self.controller.len() {
                if let Some((dx, dy)) = self.controller.drift_offset(index) {
                    self.surface.shift_orb(index, dx, dy);
                }
            }
        }

        if let Some(href) = self.fade.tick() {
            self.surface.navigate(&href);
        }
    }

    //--- Projection Helpers -----------------------------------------------

    fn project_all(&mut self) {
        for index in 0..self.controller.len() {
            if let Some((x, y)) = self.controller.anchor(index) {
                self.surface.place_orb(index, x, y);
            }
            if let Some((dx, dy)) = self.controller.drift_offset(index) {
                self.surface.shift_orb(index, dx, dy);
            }
        }
    }

    fn project_settled(&mut self) {
        for index in 0..self.controller.len() {
            self.surface.set_rail(index, self.controller.side(index));
        }
        self.project_all();
    }

    fn project_unsettled(&mut self) {
        for index in 0..self.controller.len() {
            self.surface.clear_rail(index);
        }
        self.project_all();
    }

    #[cfg(test)]
    pub(crate) fn controller(&self) -> &OrbController {
        &self.controller
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
