//! Display ordering mode.

use serde::{Deserialize, Serialize};

/// How a view orders tasks for display.
///
/// Maps one-to-one onto the `sort_completed_to_bottom` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Base (insertion) order, untouched.
    #[default]
    InsertionOrder,
    /// Open tasks first, completed tasks after; base order kept within each group.
    CompletedLast,
}

impl DisplayMode {
    /// Returns whether completed tasks sink to the bottom.
    pub fn sort_completed_to_bottom(self) -> bool {
        matches!(self, Self::CompletedLast)
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::InsertionOrder => Self::CompletedLast,
            Self::CompletedLast => Self::InsertionOrder,
        }
    }

    /// Stable label used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InsertionOrder => "insertion_order",
            Self::CompletedLast => "completed_last",
        }
    }
}

impl From<bool> for DisplayMode {
    fn from(sort_completed_to_bottom: bool) -> Self {
        if sort_completed_to_bottom {
            Self::CompletedLast
        } else {
            Self::InsertionOrder
        }
    }
}
