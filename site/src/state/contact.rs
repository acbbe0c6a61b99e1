#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Contact form fields bound to the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Whether every field carries non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Validate the form before dispatch.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank or the email
    /// address is not plausibly shaped (`local@domain` with a dotted
    /// domain).
    pub fn validate(&self) -> Result<(), String> {
        if !self.is_complete() {
            return Err("Please fill in every field.".to_owned());
        }
        let email = self.email.trim();
        let valid_shape = email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            });
        if !valid_shape {
            return Err("Please enter a valid email address.".to_owned());
        }
        Ok(())
    }
}

/// Outcome of the last submit attempt, shown under the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}
