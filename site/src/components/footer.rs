//! Page footer: brand blurb, quick links, social links, copyright line.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER_EMAIL, OWNER_LOCATION, OWNER_NAME, SOCIAL_LINKS};

/// Current year for the copyright line; falls back to the build-era year
/// when no browser clock is available (SSR).
fn current_year() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        2025
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let quick_links = NAV_LINKS
        .iter()
        .map(|&(label, href)| {
            view! {
                <a class="footer__link" href=href>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a
                    class="footer__social"
                    href=social.url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=social.name
                >
                    <span class="footer__social-icon">{social.icon}</span>
                    {social.name}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <span class="footer__brand">{OWNER_NAME}</span>
                    <p class="footer__blurb">
                        "Building modern web and mobile experiences from " {OWNER_LOCATION} "."
                    </p>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Quick Links"</h4>
                    {quick_links}
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Get In Touch"</h4>
                    <a class="footer__link" href=format!("mailto:{OWNER_EMAIL}")>
                        {OWNER_EMAIL}
                    </a>
                    <div class="footer__socials">{socials}</div>
                </div>
            </div>

            <div class="footer__copyright">
                {format!("\u{a9} {} {OWNER_NAME}. All rights reserved.", current_year())}
            </div>
        </footer>
    }
}
