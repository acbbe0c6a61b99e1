//! Contact section: validated form dispatching through the email service.

use leptos::prelude::*;

use crate::content::{OWNER_EMAIL, OWNER_LOCATION, SOCIAL_LINKS};
use crate::net::email;
use crate::state::contact::{ContactForm, SubmitStatus};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(SubmitStatus::Idle);
    let error_msg = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if status.get() == SubmitStatus::Sending {
            return;
        }

        let current = form.get();
        if let Err(msg) = current.validate() {
            error_msg.set(Some(msg));
            status.set(SubmitStatus::Error);
            return;
        }

        error_msg.set(None);
        status.set(SubmitStatus::Sending);

        leptos::task::spawn_local(async move {
            match email::send_message(&current).await {
                Ok(()) => {
                    status.set(SubmitStatus::Success);
                    form.set(ContactForm::default());
                }
                Err(msg) => {
                    log::warn!("contact form send failed: {msg}");
                    error_msg.set(Some("Something went wrong. Please try again.".to_owned()));
                    status.set(SubmitStatus::Error);
                }
            }

            // The status banner clears itself after a few seconds.
            #[cfg(feature = "hydrate")]
            {
                gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
                status.set(SubmitStatus::Idle);
                error_msg.set(None);
            }
        });
    };

    let sending = move || status.get() == SubmitStatus::Sending;

    let banner = move || match status.get() {
        SubmitStatus::Idle | SubmitStatus::Sending => None,
        SubmitStatus::Success => Some(
            view! {
                <div class="contact__banner contact__banner--success">
                    "Message sent! I'll get back to you soon."
                </div>
            }
            .into_any(),
        ),
        SubmitStatus::Error => {
            let msg = error_msg
                .get()
                .unwrap_or_else(|| "Something went wrong. Please try again.".to_owned());
            Some(
                view! { <div class="contact__banner contact__banner--error">{msg}</div> }
                    .into_any(),
            )
        }
    };

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a
                    class="contact__social"
                    href=social.url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span class="contact__social-icon">{social.icon}</span>
                    {social.name}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Get In Touch"</h2>

            <div class="contact__columns">
                <div class="contact__info">
                    <p class="contact__pitch">
                        "Have a project in mind or just want to say hello? Drop a message."
                    </p>
                    <a class="contact__detail" href=format!("mailto:{OWNER_EMAIL}")>
                        {OWNER_EMAIL}
                    </a>
                    <span class="contact__detail">{OWNER_LOCATION}</span>
                    <div class="contact__socials">{socials}</div>
                </div>

                <form class="contact__form" on:submit=on_submit>
                    <input
                        class="contact__input"
                        type="text"
                        placeholder="Your Name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="contact__input"
                        type="email"
                        placeholder="Your Email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="contact__input"
                        type="text"
                        placeholder="Subject"
                        prop:value=move || form.get().subject
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    />
                    <textarea
                        class="contact__input contact__input--message"
                        placeholder="Your Message"
                        prop:value=move || form.get().message
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>

                    <button class="btn btn--primary contact__send" type="submit" disabled=sending>
                        {move || if sending() { "Sending..." } else { "Send Message" }}
                    </button>

                    {banner}
                </form>
            </div>
        </section>
    }
}
