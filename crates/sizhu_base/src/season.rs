//! Seasons of the month branch and their ruling elements.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The four seasons, each ruled by one element. Earth has no season of its
/// own; it governs the last month of each season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// Element in command during the season.
    pub const fn element(self) -> Element {
        match self {
            Self::Spring => Element::Wood,
            Self::Summer => Element::Fire,
            Self::Autumn => Element::Metal,
            Self::Winter => Element::Water,
        }
    }
}
