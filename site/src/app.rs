//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::Projects;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// There is no server crate in this workspace; this is the document entry
/// a cargo-leptos SSR host mounts (`ssr` feature), paired with the
/// `hydrate()` entry in `lib.rs` on the client side.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: one page, sections stacked top to bottom, anchor
/// navigation only.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=crate::content::OWNER_NAME/>

        <Navbar/>
        <main class="page">
            <Hero/>
            <About/>
            <Projects/>
            <Contact/>
            <Footer/>
        </main>
    }
}
