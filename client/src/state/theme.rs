//! Light/dark theme preference and the controller that applies it.
//!
//! DESIGN
//! ======
//! Storage and OS preference access go through [`ThemeEnv`] so the
//! precedence rules (persisted value, then OS preference, then light) can be
//! exercised without a browser. The browser implementation lives in
//! `util::theme_env`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root element attribute carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored and attribute form of the theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored theme name. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button: names the theme a click switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "DARK",
            Self::Dark => "LIGHT",
        }
    }
}

/// Capabilities the theme controller needs from its host environment.
pub trait ThemeEnv {
    /// Raw persisted preference, if any.
    fn stored(&self) -> Option<String>;
    /// Persist a preference.
    fn store(&mut self, value: &str);
    /// Whether the OS currently reports a dark color scheme.
    fn prefers_dark(&self) -> bool;
    /// Theme currently applied to the document, if any.
    fn applied(&self) -> Option<Theme>;
    /// Apply a theme to the document.
    fn apply(&mut self, theme: Theme);
}

/// Applies and persists theme changes against a [`ThemeEnv`].
#[derive(Debug)]
pub struct ThemeController<E> {
    env: E,
}

impl<E: ThemeEnv> ThemeController<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Pick the startup theme: a persisted preference wins, otherwise the OS
    /// preference is applied and persisted.
    pub fn init(&mut self) -> Theme {
        let theme = self
            .env
            .stored()
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| Theme::from_prefers_dark(self.env.prefers_dark()));
        self.set(theme)
    }

    /// Apply `theme` and persist it unconditionally.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.env.apply(theme);
        self.env.store(theme.as_str());
        theme
    }

    /// Flip the currently applied theme. A document with no theme applied
    /// counts as light.
    pub fn toggle(&mut self) -> Theme {
        let current = self.env.applied().unwrap_or_default();
        self.set(current.toggled())
    }

    /// Track an OS color-scheme change. Ignored once any preference has been
    /// persisted; returns the applied theme otherwise.
    pub fn os_preference_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.env.stored().is_some() {
            return None;
        }
        Some(self.set(Theme::from_prefers_dark(prefers_dark)))
    }
}
