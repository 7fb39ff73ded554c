//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use orb_nav::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Widget facade
pub use crate::widget::{OrbWidget, WidgetBuilder, WidgetHandle};

// Orb model
pub use crate::core::orbs::{OrbController, Phase, RailSide};

// Configuration
pub use crate::core::target::{default_pages, NavigationTarget};
pub use crate::core::viewport::Viewport;

// Presentation contract
pub use crate::core::surface::{Surface, SurfaceError};

// Host bridge
pub use crate::host::{HostError, HostPump};
