//! Contact form email dispatch via the EmailJS REST API.
//!
//! Client-side (hydrate): a real HTTP POST via `gloo-net`.
//! Server-side (SSR): a stub returning an error string since the dispatch
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` instead of panics so a failed send
//! degrades to an inline error banner without crashing hydration.

#![allow(clippy::unused_async)]

use serde::Serialize;

use crate::state::contact::ContactForm;

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// EmailJS send endpoint.
pub const ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Public client-side identifiers; the matching template delivers to the
// owner's inbox.
const SERVICE_ID: &str = "service_kt0p5p9";
const TEMPLATE_ID: &str = "template_49i6et7";
const PUBLIC_KEY: &str = "As0TkG6Jds3fVjOVz";

/// Request body expected by the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct EmailRequest {
    service_id: &'static str,
    template_id: &'static str,
    user_id: &'static str,
    template_params: TemplateParams,
}

#[derive(Debug, Serialize)]
struct TemplateParams {
    from_name: String,
    from_email: String,
    subject: String,
    message: String,
    to_email: &'static str,
}

impl EmailRequest {
    fn from_form(form: &ContactForm) -> Self {
        Self {
            service_id: SERVICE_ID,
            template_id: TEMPLATE_ID,
            user_id: PUBLIC_KEY,
            template_params: TemplateParams {
                from_name: form.name.trim().to_owned(),
                from_email: form.email.trim().to_owned(),
                subject: form.subject.trim().to_owned(),
                message: form.message.trim().to_owned(),
                to_email: crate::content::OWNER_EMAIL,
            },
        }
    }
}

/// Send the contact form through the email service.
///
/// # Errors
///
/// Returns a user-facing message when the request cannot be built, the
/// network call fails, or the service answers with a non-success status.
pub async fn send_message(form: &ContactForm) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = EmailRequest::from_form(form);
        let resp = gloo_net::http::Request::post(ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("email service answered {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}
