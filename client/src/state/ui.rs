//! Page-level UI state: active tab and theme.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-level UI state: which main tab is showing and the theme.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub active_tab: MainTab,
}

/// Color scheme selected by the header toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of `html[data-theme]`, also the persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle tooltip, naming the scheme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Self::Light => "Switch to light mode",
            Self::Dark => "Switch to dark mode",
        }
    }

    /// Toggle icon: a sun while dark, a moon while light.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Tabs of the main learning area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainTab {
    #[default]
    Playground,
    Exercises,
    Tutorials,
    Progress,
}

impl MainTab {
    pub const ALL: [MainTab; 4] = [Self::Playground, Self::Exercises, Self::Tutorials, Self::Progress];

    /// Short label shown on the tab trigger.
    pub fn label(self) -> &'static str {
        match self {
            Self::Playground => "Code",
            Self::Exercises => "Exercises",
            Self::Tutorials => "Tutorials",
            Self::Progress => "Progress",
        }
    }

    /// Stable identifier used for element ids and `aria-controls`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Playground => "playground",
            Self::Exercises => "exercises",
            Self::Tutorials => "tutorials",
            Self::Progress => "progress",
        }
    }
}
