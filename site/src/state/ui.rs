#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: mobile menu and the active About-section tab.
///
/// Provided to components as an `RwSignal<UiState>` context from the root
/// `App`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub about_tab: AboutTab,
}

/// Tabs available in the About section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AboutTab {
    #[default]
    About,
    Skills,
    Experience,
}

impl AboutTab {
    pub const ALL: [Self; 3] = [Self::About, Self::Skills, Self::Experience];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
        }
    }
}
