//! Outbound network calls. The site has no backend of its own; the only
//! dispatch is the contact form's transactional email request.

pub mod email;
