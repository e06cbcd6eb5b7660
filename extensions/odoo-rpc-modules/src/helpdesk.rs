mod helpdesk_api;
mod helpdesk_form;
mod helpdesk_records;

pub use helpdesk_api::{HelpdeskApi, PARTNER_MODEL, TEAM_MODEL, TICKET_MODEL};
pub use helpdesk_form::{HelpdeskForm, HelpdeskSettings};
pub use helpdesk_records::{NewTicket, Team, Ticket};
