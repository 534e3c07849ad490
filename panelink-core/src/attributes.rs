//! Visual parameters of a split presentation
//!
//! Attributes describe how the task bounds are divided between the two
//! containers of a pairing. They are computed upstream by the manager on
//! every re-layout (window resize, fold-state change) and replaced on the
//! pairing wholesale; nothing in this module couples lifecycles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default split ratio (50% of the task bounds for the primary).
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Minimum valid split ratio.
pub const MIN_SPLIT_RATIO: f64 = 0.0;

/// Maximum valid split ratio.
pub const MAX_SPLIT_RATIO: f64 = 1.0;

/// How the task bounds are divided between the two containers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Side-by-side split with a fixed fraction for the primary container.
    Ratio(f64),
    /// Split along the device hinge on foldable hardware.
    Hinge,
    /// Both containers expand to the full task bounds, one covering the
    /// other (stacked presentation).
    ExpandContainers,
}

impl SplitKind {
    /// Creates a ratio split.
    ///
    /// # Panics
    ///
    /// Panics if `ratio` is not in the range [0.0, 1.0].
    #[must_use]
    pub fn ratio(ratio: f64) -> Self {
        assert!(
            (MIN_SPLIT_RATIO..=MAX_SPLIT_RATIO).contains(&ratio),
            "Split ratio must be between {MIN_SPLIT_RATIO} and {MAX_SPLIT_RATIO}"
        );
        Self::Ratio(ratio)
    }

    /// Returns true if both containers fill the task bounds, which the
    /// manager presents as stacked panes.
    #[must_use]
    pub const fn expands_containers(self) -> bool {
        match self {
            Self::ExpandContainers => true,
            Self::Ratio(_) | Self::Hinge => false,
        }
    }
}

impl Default for SplitKind {
    fn default() -> Self {
        Self::Ratio(DEFAULT_SPLIT_RATIO)
    }
}

impl fmt::Display for SplitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(ratio) => write!(f, "ratio({ratio:.2})"),
            Self::Hinge => write!(f, "hinge"),
            Self::ExpandContainers => write!(f, "expand"),
        }
    }
}

/// Direction in which the primary and secondary panes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Follow the locale's horizontal text direction.
    #[default]
    Locale,
    /// Primary on the left, secondary on the right.
    LeftToRight,
    /// Primary on the right, secondary on the left.
    RightToLeft,
    /// Primary on top, secondary below.
    TopToBottom,
    /// Primary below, secondary on top.
    BottomToTop,
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locale => write!(f, "locale"),
            Self::LeftToRight => write!(f, "left_to_right"),
            Self::RightToLeft => write!(f, "right_to_left"),
            Self::TopToBottom => write!(f, "top_to_bottom"),
            Self::BottomToTop => write!(f, "bottom_to_top"),
        }
    }
}

/// Visual parameters of one split: bounds division and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitAttributes {
    /// How the task bounds are divided.
    pub split_kind: SplitKind,
    /// Direction in which the panes are laid out.
    pub layout_direction: LayoutDirection,
}

impl SplitAttributes {
    /// Creates attributes with the default ratio split and locale layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates attributes that expand both containers (stacked panes).
    #[must_use]
    pub const fn expand_containers() -> Self {
        Self {
            split_kind: SplitKind::ExpandContainers,
            layout_direction: LayoutDirection::Locale,
        }
    }

    /// Sets a ratio split.
    ///
    /// # Panics
    ///
    /// Panics if `ratio` is not in the range [0.0, 1.0].
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.split_kind = SplitKind::ratio(ratio);
        self
    }

    /// Sets the bounds division.
    #[must_use]
    pub const fn with_kind(mut self, kind: SplitKind) -> Self {
        self.split_kind = kind;
        self
    }

    /// Sets the layout direction.
    #[must_use]
    pub const fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Returns true if the panes are presented stacked rather than
    /// side by side.
    #[must_use]
    pub const fn expands_containers(&self) -> bool {
        self.split_kind.expands_containers()
    }
}

impl Default for SplitAttributes {
    fn default() -> Self {
        Self {
            split_kind: SplitKind::default(),
            layout_direction: LayoutDirection::default(),
        }
    }
}

impl fmt::Display for SplitAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.split_kind, self.layout_direction)
    }
}
