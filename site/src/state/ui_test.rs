use super::*;

#[test]
fn defaults_closed_on_about_tab() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert_eq!(state.about_tab, AboutTab::About);
}

#[test]
fn all_tabs_have_distinct_labels() {
    let labels: Vec<_> = AboutTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["About", "Skills", "Experience"]);
}
