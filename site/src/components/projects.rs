//! Project showcase section: one card per portfolio project.

use leptos::prelude::*;

use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            let tech = project
                .tech
                .iter()
                .map(|name| view! { <span class="project-card__tech">{*name}</span> })
                .collect::<Vec<_>>();

            let live = project.live.map(|url| {
                view! {
                    <a
                        class="project-card__link project-card__link--live"
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Live Demo"
                    </a>
                }
            });

            let github = project.github.map(|url| {
                view! {
                    <a
                        class="project-card__link project-card__link--github"
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "GitHub"
                    </a>
                }
            });

            view! {
                <article class="project-card">
                    <h3 class="project-card__title">{project.title}</h3>
                    <p class="project-card__description">{project.description}</p>
                    <div class="project-card__tech-list">{tech}</div>
                    <div class="project-card__links">{live} {github}</div>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Featured Projects"</h2>
            <div class="projects__grid">{cards}</div>
        </section>
    }
}
