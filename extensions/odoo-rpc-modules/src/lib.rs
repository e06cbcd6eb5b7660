//! Visitor-facing services that drive an [`OdooClient`](odoo_rpc_client::OdooClient):
//! helpdesk tickets and newsletter subscriptions.
//!
//! Each service borrows the client mutably for its lifetime, so the session's
//! uid cache and last error stay consistent across the calls it makes.

mod error;
mod helpdesk;
mod newsletter;
mod records;
mod submission;

pub use error::ServiceError;
pub use helpdesk::{
    HelpdeskApi, HelpdeskForm, HelpdeskSettings, NewTicket, PARTNER_MODEL, TEAM_MODEL,
    TICKET_MODEL, Team, Ticket,
};
pub use newsletter::{
    CONTACT_MODEL, ContactDetails, LIST_MODEL, MailingList, NewsletterApi, NewsletterForm,
    NewsletterSettings,
};
pub use submission::{SubmissionOutcome, is_valid_email};
