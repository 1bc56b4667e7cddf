//! Visual theme state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Light/dark mode. Presentation-only: the draw engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light backgrounds, dark text (default).
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl Theme {
    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value carried by the `data-theme` attribute on the `<html>` element.
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
