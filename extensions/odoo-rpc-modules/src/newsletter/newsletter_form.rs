use super::mailing_list::ContactDetails;
use super::newsletter_api::NewsletterApi;
use crate::submission::{SubmissionOutcome, clean, is_valid_email};
use odoo_rpc_transport::RpcTransport;
use serde::Deserialize;

const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Site-level settings for the subscription form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewsletterSettings {
    /// List used when the form does not pick one.
    pub default_list_id: i64,
    pub success_message: String,
    pub error_message: String,
}

impl Default for NewsletterSettings {
    fn default() -> Self {
        Self {
            default_list_id: 0,
            success_message: "Thank you for subscribing!".to_owned(),
            error_message: "An error occurred. Please try again.".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub company: String,
    pub list_id: Option<i64>,
}

impl<T: RpcTransport> NewsletterApi<'_, T> {
    /// Validates a visitor's form and subscribes them.
    ///
    /// Like the helpdesk form, failures become an unsuccessful outcome with
    /// the configured error message.
    pub fn submit(&mut self, form: &NewsletterForm, settings: &NewsletterSettings) -> SubmissionOutcome {
        let email = clean(&form.email);
        if email.is_empty() || !is_valid_email(&email) {
            return SubmissionOutcome::rejected(INVALID_EMAIL);
        }

        let list_id = match form.list_id {
            Some(id) if id > 0 => id,
            _ => settings.default_list_id,
        };
        let details = ContactDetails {
            phone: clean(&form.phone),
            company: clean(&form.company),
        };

        match self.subscribe(&email, &clean(&form.name), list_id, &details) {
            Ok(()) => SubmissionOutcome::accepted(&settings.success_message, None),
            Err(err) => {
                tracing::warn!(error = %err, list_id, "Newsletter form submission failed");
                SubmissionOutcome::rejected(&settings.error_message)
            }
        }
    }
}
