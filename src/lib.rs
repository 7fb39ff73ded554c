//=========================================================================
// Orb Nav — Library Root
//
// This crate defines the public API surface of the orb navigation
// widget: a set of circular navigation buttons that drift around a hero
// region, settle into left/right rails once the viewer scrolls past a
// threshold, and perform a faded page navigation on click.
//
// Responsibilities:
// - Expose the widget facade (`WidgetBuilder` / `OrbWidget`)
// - Expose the pure orb model for hosts that embed it directly
// - Keep the model/presentation split: the crate computes positions and
//   phases, the embedder's `Surface` projects them onto the page
//
// Typical usage:
// ```no_run
// use orb_nav::prelude::*;
//
// # struct PageSurface;
// # impl Surface for PageSurface {
// #     fn mount_orb(&mut self, _: usize, _: &str) -> Result<(), SurfaceError> { Ok(()) }
// #     fn place_orb(&mut self, _: usize, _: f32, _: f32) {}
// #     fn navigate(&mut self, _: &str) {}
// # }
// let mut handle = WidgetBuilder::new()
//     .build()
//     .start(PageSurface, Viewport::new(1280.0, 800.0));
//
// // per display frame, from the host environment:
// handle.pump().push_scroll(420.0);
// handle.pump().flush();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the orb model and logic loop (controller, drift math,
// rail layout, fade countdown, surface contract). It is exposed publicly
// for embedders that want the model without the threaded runtime.
//
// `host` contains the embedder-facing event bridge (pump, buffer,
// events).
//
pub mod core;
pub mod host;

//--- Internal Modules ----------------------------------------------------
//
// `widget` defines the facade that wires the host bridge to the logic
// thread.
//
mod widget;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the facade types so users can simply
// `use orb_nav::WidgetBuilder;` without knowing the module structure.
//
pub mod prelude;
pub use widget::{OrbWidget, WidgetBuilder, WidgetHandle};
