//! UI events
//!
//! User actions the showcase reacts to. Hosts translate their native input
//! (pointer clicks on the chevrons, the theme button, keyboard arrows) into
//! these before handing them to a view.

use serde::{Deserialize, Serialize};

/// A user action on the showcase surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// The "previous" chevron
    Prev,
    /// The "next" chevron
    Next,
    /// The light/dark toggle in the corner
    ToggleTheme,
}

impl UiEvent {
    /// All events, in control order
    pub const ALL: [UiEvent; 3] = [UiEvent::Prev, UiEvent::Next, UiEvent::ToggleTheme];

    /// Stable identifier used in scenarios and logs
    pub fn id(&self) -> &'static str {
        match self {
            UiEvent::Prev => "prev",
            UiEvent::Next => "next",
            UiEvent::ToggleTheme => "toggle_theme",
        }
    }

    /// Parse an identifier produced by [`UiEvent::id`]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for event in UiEvent::ALL {
            assert_eq!(UiEvent::from_id(event.id()), Some(event));
        }
        assert_eq!(UiEvent::from_id("select"), None);
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&UiEvent::ToggleTheme).unwrap();
        assert_eq!(json, "\"toggle_theme\"");
    }
}
