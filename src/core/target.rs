//=========================================================================
// Navigation Targets
//
// The fixed, ordered list of pages the orbs navigate to.
//
// Responsibilities:
// - Represent one (display name, destination locator) pair
// - Validate locators and fall back to a safe default when malformed
// - Provide the canonical six-page set used by the original site
//
//=========================================================================

//=== Default Locator =====================================================

/// Destination used when an orb's locator is missing or malformed.
///
/// A bad locator fails that one navigation attempt, never the widget, so
/// clicks always land somewhere sensible.
pub const DEFAULT_LOCATOR: &str = "index.html";

//=== NavigationTarget ====================================================

/// One navigable page: a display name and a destination locator.
///
/// Targets are immutable after construction. The widget is configured with
/// an ordered sequence of these at startup and never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    name: String,
    href: String,
}

impl NavigationTarget {
    /// Creates a target from a display name and destination locator.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// Display name shown on the orb.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw destination locator as configured, without validation.
    pub fn href(&self) -> &str {
        &self.href
    }

    //--- locator() --------------------------------------------------------
    //
    // Resolved destination for a navigation attempt. Malformed locators
    // (empty, or containing whitespace) resolve to DEFAULT_LOCATOR.
    //
    pub fn locator(&self) -> &str {
        if self.href.is_empty() || self.href.chars().any(char::is_whitespace) {
            DEFAULT_LOCATOR
        } else {
            &self.href
        }
    }
}

//=== Canonical Pages =====================================================

/// The six-page set of the original site, in orb order.
///
/// Index 0..=2 settle on the left rail, 3..=5 on the right. Supplying a
/// shorter list is fine; orb count and rail slots adjust to match.
pub fn default_pages() -> Vec<NavigationTarget> {
    vec![
        NavigationTarget::new("Index", "index.html"),
        NavigationTarget::new("About", "about.html"),
        NavigationTarget::new("Interests", "interests.html"),
        NavigationTarget::new("Experience", "experience.html"),
        NavigationTarget::new("Resume", "resume.html"),
        NavigationTarget::new("Contact", "contact.html"),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================
