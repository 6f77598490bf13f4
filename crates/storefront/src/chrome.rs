//! Navigation chrome: dropdown menus, the basket overlay, the terms checkbox
//! and the accent colour painted on the header.
//!
//! Pure UI state for one page load; nothing here is persisted.

use std::fmt;
use std::str::FromStr;

/// Header dropdown menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    Speakers,
    More,
}

impl Dropdown {
    pub const ALL: [Self; 2] = [Self::Speakers, Self::More];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Speakers => "speakers",
            Self::More => "more",
        }
    }
}

impl fmt::Display for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dropdown {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speakers" => Ok(Self::Speakers),
            "more" => Ok(Self::More),
            _ => Err(format!("invalid dropdown: {s}")),
        }
    }
}

/// Result of pressing the checkout button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutGate {
    /// Terms accepted; continue to payment and delivery.
    Proceed,
    /// Terms not accepted yet.
    TermsRequired,
}

/// Header and overlay state.
#[derive(Debug, Clone, Default)]
pub struct NavigationChrome {
    open_dropdown: Option<Dropdown>,
    overlay_open: bool,
    terms_accepted: bool,
    accent: Option<&'static str>,
}

impl NavigationChrome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `dropdown`, or close it if it was already open. Any other
    /// dropdown is closed either way.
    pub fn toggle_dropdown(&mut self, dropdown: Dropdown) {
        let was_open = self.open_dropdown == Some(dropdown);
        self.close_dropdowns();
        if !was_open {
            self.open_dropdown = Some(dropdown);
        }
    }

    /// Click anywhere outside a dropdown trigger.
    pub const fn close_dropdowns(&mut self) {
        self.open_dropdown = None;
    }

    /// A link inside `dropdown` was followed.
    pub fn follow_dropdown_link(&mut self, dropdown: Dropdown) {
        if self.open_dropdown == Some(dropdown) {
            self.open_dropdown = None;
        }
    }

    #[must_use]
    pub const fn open_dropdown(&self) -> Option<Dropdown> {
        self.open_dropdown
    }

    #[must_use]
    pub fn is_dropdown_open(&self, dropdown: Dropdown) -> bool {
        self.open_dropdown == Some(dropdown)
    }

    /// Basket button in the header; also closes the dropdowns.
    pub const fn open_overlay(&mut self) {
        self.overlay_open = true;
        self.close_dropdowns();
    }

    /// Close button, or a click on the dimmed backdrop.
    pub const fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Escape closes the overlay only when it is open. Returns whether it did.
    pub const fn escape(&mut self) -> bool {
        let was_open = self.overlay_open;
        self.overlay_open = false;
        was_open
    }

    #[must_use]
    pub const fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub const fn toggle_terms(&mut self) {
        self.terms_accepted = !self.terms_accepted;
    }

    #[must_use]
    pub const fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Checkout only proceeds once the terms are accepted.
    #[must_use]
    pub const fn checkout(&self) -> CheckoutGate {
        if self.terms_accepted {
            CheckoutGate::Proceed
        } else {
            CheckoutGate::TermsRequired
        }
    }

    /// Paint nav links, basket button and logo in `accent`.
    pub const fn apply_accent(&mut self, accent: &'static str) {
        self.accent = Some(accent);
    }

    #[must_use]
    pub const fn accent(&self) -> Option<&'static str> {
        self.accent
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut chrome = NavigationChrome::new();
        chrome.toggle_dropdown(Dropdown::Speakers);
        assert_eq!(chrome.open_dropdown(), Some(Dropdown::Speakers));
        chrome.toggle_dropdown(Dropdown::Speakers);
        assert_eq!(chrome.open_dropdown(), None);
    }

    #[test]
    fn test_only_one_dropdown_open() {
        let mut chrome = NavigationChrome::new();
        chrome.toggle_dropdown(Dropdown::Speakers);
        chrome.toggle_dropdown(Dropdown::More);
        assert!(chrome.is_dropdown_open(Dropdown::More));
        assert!(!chrome.is_dropdown_open(Dropdown::Speakers));
    }

    #[test]
    fn test_follow_link_closes_its_dropdown_only() {
        let mut chrome = NavigationChrome::new();
        chrome.toggle_dropdown(Dropdown::More);
        chrome.follow_dropdown_link(Dropdown::Speakers);
        assert!(chrome.is_dropdown_open(Dropdown::More));
        chrome.follow_dropdown_link(Dropdown::More);
        assert_eq!(chrome.open_dropdown(), None);
    }

    #[test]
    fn test_opening_overlay_closes_dropdowns() {
        let mut chrome = NavigationChrome::new();
        chrome.toggle_dropdown(Dropdown::Speakers);
        chrome.open_overlay();
        assert!(chrome.overlay_open());
        assert_eq!(chrome.open_dropdown(), None);
    }

    #[test]
    fn test_escape_only_acts_when_open() {
        let mut chrome = NavigationChrome::new();
        assert!(!chrome.escape());
        chrome.open_overlay();
        assert!(chrome.escape());
        assert!(!chrome.overlay_open());
    }

    #[test]
    fn test_checkout_gate() {
        let mut chrome = NavigationChrome::new();
        assert_eq!(chrome.checkout(), CheckoutGate::TermsRequired);
        chrome.toggle_terms();
        assert_eq!(chrome.checkout(), CheckoutGate::Proceed);
        chrome.toggle_terms();
        assert_eq!(chrome.checkout(), CheckoutGate::TermsRequired);
    }

    #[test]
    fn test_dropdown_parse() {
        assert_eq!("speakers".parse::<Dropdown>().unwrap(), Dropdown::Speakers);
        assert!("cart".parse::<Dropdown>().is_err());
    }
}
