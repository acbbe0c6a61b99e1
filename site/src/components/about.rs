//! About section: tab switcher over bio, skills, and experience timeline.
//!
//! Content slides in the first time the section scrolls into view.

use leptos::prelude::*;

use crate::content::{
    EXPERIENCES, OTHER_SKILLS, OWNER_EMAIL, OWNER_LOCATION, OWNER_TAGLINE, QUICK_STATS, SKILLS,
};
use crate::state::ui::{AboutTab, UiState};

#[component]
pub fn About() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active_tab = move || ui.get().about_tab;

    // Without a browser there is no scroll position; render revealed so SSR
    // output is never hidden.
    let revealed = RwSignal::new(cfg!(not(feature = "hydrate")));
    let section_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(el) = section_ref.get() {
                crate::util::reveal::observe_once(&el, move || revealed.set(true));
            }
        });
    }

    let tabs = AboutTab::ALL
        .into_iter()
        .map(|tab| {
            let set_tab = move |_| {
                ui.update(|u| u.about_tab = tab);
            };
            view! {
                <button
                    class="about__tab"
                    class:about__tab--active=move || active_tab() == tab
                    on:click=set_tab
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="about" class="about" class:about--revealed=move || revealed.get() node_ref=section_ref>
            <h2 class="section-title">"About Me"</h2>

            <div class="about__tabs">{tabs}</div>

            <div class="about__content">
                {move || match active_tab() {
                    AboutTab::About => view! { <AboutPane/> }.into_any(),
                    AboutTab::Skills => view! { <SkillsPane/> }.into_any(),
                    AboutTab::Experience => view! { <ExperiencePane/> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn AboutPane() -> impl IntoView {
    let stats = QUICK_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="about__stat">
                    <span class="about__stat-number">{stat.number}</span>
                    <span class="about__stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="about__pane">
            <p class="about__tagline">{OWNER_TAGLINE}</p>
            <p class="about__meta">
                <span class="about__meta-item">{OWNER_LOCATION}</span>
                <a class="about__meta-item" href=format!("mailto:{OWNER_EMAIL}")>
                    {OWNER_EMAIL}
                </a>
            </p>
            <div class="about__stats">{stats}</div>
        </div>
    }
}

#[component]
fn SkillsPane() -> impl IntoView {
    let bars = SKILLS
        .iter()
        .map(|skill| {
            view! {
                <div class="skill">
                    <div class="skill__row">
                        <span class="skill__name">{skill.name}</span>
                        <span class="skill__level">{format!("{}%", skill.level)}</span>
                    </div>
                    <div class="skill__track">
                        <div
                            class=format!("skill__bar {}", skill.bar_class)
                            style:width=format!("{}%", skill.level)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let chips = OTHER_SKILLS
        .iter()
        .map(|name| view! { <span class="skill-chip">{*name}</span> })
        .collect::<Vec<_>>();

    view! {
        <div class="about__pane">
            <div class="skills__bars">{bars}</div>
            <h3 class="skills__subtitle">"Also Working With"</h3>
            <div class="skills__chips">{chips}</div>
        </div>
    }
}

#[component]
fn ExperiencePane() -> impl IntoView {
    let entries = EXPERIENCES
        .iter()
        .map(|exp| {
            let tech = exp
                .tech
                .iter()
                .map(|name| view! { <span class="timeline__tech">{*name}</span> })
                .collect::<Vec<_>>();
            view! {
                <div class="timeline__entry">
                    <div class="timeline__period">{exp.period}</div>
                    <div class="timeline__body">
                        <h3 class="timeline__title">{exp.title}</h3>
                        <span class="timeline__company">{exp.company}</span>
                        <p class="timeline__description">{exp.description}</p>
                        <div class="timeline__tech-list">{tech}</div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="about__pane timeline">{entries}</div> }
}
