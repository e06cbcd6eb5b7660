use super::helpdesk_api::HelpdeskApi;
use super::helpdesk_records::NewTicket;
use crate::submission::{SubmissionOutcome, clean, is_valid_email};
use odoo_rpc_transport::RpcTransport;
use serde::Deserialize;

const INVALID_EMAIL: &str = "Please enter a valid email address.";
const SUBJECT_REQUIRED: &str = "The subject is required.";
const DESCRIPTION_REQUIRED: &str = "The description is required.";

/// Site-level settings for the ticket form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelpdeskSettings {
    /// Team used when the form does not pick one; `0` leaves tickets unassigned.
    pub default_team_id: i64,
    pub success_message: String,
    pub error_message: String,
}

impl Default for HelpdeskSettings {
    fn default() -> Self {
        Self {
            default_team_id: 0,
            success_message: "Your ticket has been created successfully!".to_owned(),
            error_message: "An error occurred. Please try again.".to_owned(),
        }
    }
}

/// A ticket form as posted by a visitor. Absent fields deserialize empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelpdeskForm {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub subject: String,
    pub description: String,
    pub priority: Option<u32>,
    pub team_id: Option<i64>,
}

impl<T: RpcTransport> HelpdeskApi<'_, T> {
    /// Validates a visitor's form and files the ticket.
    ///
    /// Never fails: problems come back as an unsuccessful outcome carrying a
    /// message fit for the visitor. Server-side details go to the log and the
    /// client's last error.
    pub fn submit(&mut self, form: &HelpdeskForm, settings: &HelpdeskSettings) -> SubmissionOutcome {
        let email = clean(&form.email);
        let subject = clean(&form.subject);
        let description = clean(&form.description);

        if email.is_empty() || !is_valid_email(&email) {
            return SubmissionOutcome::rejected(INVALID_EMAIL);
        }
        if subject.is_empty() {
            return SubmissionOutcome::rejected(SUBJECT_REQUIRED);
        }
        if description.is_empty() {
            return SubmissionOutcome::rejected(DESCRIPTION_REQUIRED);
        }

        let team_id = match form.team_id {
            Some(id) if id > 0 => id,
            _ => settings.default_team_id,
        };

        let ticket = NewTicket::new(email, subject)
            .name(clean(&form.name))
            .phone(clean(&form.phone))
            .description(description)
            .priority(form.priority.unwrap_or(2))
            .team(team_id);

        match self.create_ticket(&ticket) {
            Ok(ticket_id) => SubmissionOutcome::accepted(&settings.success_message, Some(ticket_id)),
            Err(err) => {
                tracing::warn!(error = %err, "Helpdesk form submission failed");
                SubmissionOutcome::rejected(&settings.error_message)
            }
        }
    }
}
