//! Panel size-mode state machine.
//!
//! The panel's vertical extent is a four-state cycle persisted as a single
//! integer. Any persisted value with no matching state falls back to
//! [`SizeMode::Small`] rather than failing.

/// Vertical-extent display state of the panel.
///
/// Cycles forward with wrap-around on each header interaction:
/// collapsed -> small -> medium -> full -> collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Header only; the content area is never rendered.
    Collapsed,

    /// Compact list.
    #[default]
    Small,

    /// List plus detail pane, height-capped.
    Medium,

    /// List plus detail pane, filling all available space.
    Full,
}

impl SizeMode {
    /// Returns the next mode in the cycle (wrapping).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Collapsed => Self::Small,
            Self::Small => Self::Medium,
            Self::Medium => Self::Full,
            Self::Full => Self::Collapsed,
        }
    }

    /// Maps a persisted integer back to a mode.
    ///
    /// Out-of-range values fall back to `Small`.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Collapsed,
            1 => Self::Small,
            2 => Self::Medium,
            3 => Self::Full,
            _ => Self::Small,
        }
    }

    /// Returns the integer stored in the preference file.
    #[must_use]
    pub fn as_raw(self) -> i64 {
        match self {
            Self::Collapsed => 0,
            Self::Small => 1,
            Self::Medium => 2,
            Self::Full => 3,
        }
    }

    /// Returns the display label for the header.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Full => "full",
        }
    }

    /// Whether the content area below the header is rendered at all.
    #[must_use]
    pub fn shows_content(&self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}
