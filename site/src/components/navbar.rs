//! Fixed navigation bar with anchor links and a mobile hamburger menu.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER_NAME};
use crate::state::ui::UiState;

/// Top navigation. Desktop shows the links inline; mobile collapses them
/// behind a hamburger toggle held in the shared [`UiState`].
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_open = move || ui.get().menu_open;

    let toggle_menu = move |_| {
        ui.update(|u| u.menu_open = !u.menu_open);
    };

    // Following a link always collapses the mobile menu.
    let close_menu = move |_| {
        ui.update(|u| u.menu_open = false);
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(label, href)| {
                view! {
                    <a class="navbar__link" href=href on:click=close_menu>
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="#">
                    {OWNER_NAME}
                </a>

                <div class="navbar__links">{links}</div>

                <button
                    class="navbar__burger"
                    aria-label="Toggle navigation"
                    on:click=toggle_menu
                >
                    {move || if menu_open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__mobile">{links}</div>
            </Show>
        </nav>
    }
}
