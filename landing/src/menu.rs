//! Mobile navigation menu state.
//!
//! Two states, two events, and a total transition function. The root
//! composition owns the only copy of the state; the header only receives a
//! read-only signal and callbacks that emit [`MenuEvent`]s.

use std::fmt;

/// Whether the mobile navigation panel is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that drive the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button was pressed
    Toggle,
    /// A navigation link was activated; navigation itself proceeds regardless
    Navigate,
}

impl MenuState {
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => self.toggled(),
            MenuEvent::Navigate => self.after_navigation(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn after_navigation(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Closed => f.write_str("closed"),
            MenuState::Open => f.write_str("open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn single_toggle_opens() {
        assert_eq!(MenuState::Closed.apply(MenuEvent::Toggle), MenuState::Open);
    }

    #[test]
    fn double_toggle_round_trips() {
        for start in [MenuState::Closed, MenuState::Open] {
            let end = start.apply(MenuEvent::Toggle).apply(MenuEvent::Toggle);
            assert_eq!(end, start);
        }
    }

    #[test]
    fn navigation_always_closes() {
        assert_eq!(MenuState::Open.apply(MenuEvent::Navigate), MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(MenuEvent::Navigate), MenuState::Closed);
    }

    #[test]
    fn aria_expanded_tracks_state() {
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
        assert_eq!(MenuState::Open.to_string(), "open");
    }
}
