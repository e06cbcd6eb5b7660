use super::helpdesk_records::{NewTicket, Team, Ticket};
use crate::ServiceError;
use odoo_rpc_client::{Domain, OdooClient, RpcStruct, RpcValue, SearchOptions};
use odoo_rpc_transport::RpcTransport;

pub const TICKET_MODEL: &str = "helpdesk.ticket";
pub const TEAM_MODEL: &str = "helpdesk.team";
pub const PARTNER_MODEL: &str = "res.partner";

const TEAM_FIELDS: &[&str] = &["id", "name", "use_website_helpdesk_form"];
const TICKET_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "partner_id",
    "team_id",
    "stage_id",
    "priority",
    "create_date",
];
const TICKET_SUMMARY_FIELDS: &[&str] = &["id", "name", "stage_id", "priority", "create_date"];

/// Label used when a ticket has no stage.
const UNKNOWN_STAGE: &str = "Unknown";

/// Helpdesk operations: teams, tickets, and the partners tickets belong to.
pub struct HelpdeskApi<'a, T: RpcTransport> {
    client: &'a mut OdooClient<T>,
}

impl<'a, T: RpcTransport> HelpdeskApi<'a, T> {
    pub fn new(client: &'a mut OdooClient<T>) -> Self {
        Self { client }
    }

    pub fn teams(&mut self) -> Result<Vec<Team>, ServiceError> {
        self.client
            .search_read(TEAM_MODEL, Domain::new(), TEAM_FIELDS, SearchOptions::new())?
            .iter()
            .map(Team::from_record)
            .collect()
    }

    pub fn team(&mut self, team_id: i64) -> Result<Team, ServiceError> {
        let records = self.client.read(TEAM_MODEL, &[team_id], &["id", "name"])?;
        match records.first() {
            Some(record) => Team::from_record(record),
            None => Err(ServiceError::not_found(TEAM_MODEL, team_id)),
        }
    }

    /// Files a ticket for `ticket.email`, creating the partner on first contact.
    ///
    /// Returns the new ticket id.
    pub fn create_ticket(&mut self, ticket: &NewTicket) -> Result<i64, ServiceError> {
        if ticket.email.is_empty() || ticket.subject.is_empty() {
            return Err(ServiceError::Validation(
                "A ticket needs an email address and a subject.".to_owned(),
            ));
        }

        let partner_id = self.find_or_create_partner(&ticket.email, &ticket.name, &ticket.phone)?;

        let mut values = RpcStruct::new();
        values.insert("name".into(), RpcValue::from(&ticket.subject));
        values.insert("description".into(), RpcValue::from(&ticket.description));
        values.insert("partner_id".into(), RpcValue::Int(partner_id));
        values.insert("priority".into(), RpcValue::from(&ticket.priority));
        if let Some(team_id) = ticket.team_id.filter(|id| *id > 0) {
            values.insert("team_id".into(), RpcValue::Int(team_id));
        }

        let ticket_id = self.client.create(TICKET_MODEL, values)?;
        tracing::info!(ticket_id, partner_id, team_id = ?ticket.team_id, "Helpdesk ticket created");
        Ok(ticket_id)
    }

    pub fn ticket(&mut self, ticket_id: i64) -> Result<Ticket, ServiceError> {
        let records = self.client.read(TICKET_MODEL, &[ticket_id], TICKET_FIELDS)?;
        match records.first() {
            Some(record) => Ticket::from_record(record),
            None => Err(ServiceError::not_found(TICKET_MODEL, ticket_id)),
        }
    }

    /// The partner's most recent tickets, newest first. Unknown addresses
    /// have no tickets rather than being an error.
    pub fn tickets_by_email(&mut self, email: &str, limit: i64) -> Result<Vec<Ticket>, ServiceError> {
        let Some(partner_id) = self.find_partner(email)? else {
            return Ok(Vec::new());
        };

        self.client
            .search_read(
                TICKET_MODEL,
                Domain::new().filter("partner_id", "=", partner_id),
                TICKET_SUMMARY_FIELDS,
                SearchOptions::new().limit(limit).order("create_date desc"),
            )?
            .iter()
            .map(Ticket::from_record)
            .collect()
    }

    /// Ticket counts per stage name, in the order stages are first seen.
    ///
    /// `team_id` of `None` (or a non-positive id) counts across all teams.
    pub fn count_tickets_by_status(
        &mut self,
        team_id: Option<i64>,
    ) -> Result<Vec<(String, usize)>, ServiceError> {
        let mut domain = Domain::new();
        if let Some(team_id) = team_id.filter(|id| *id > 0) {
            domain = domain.filter("team_id", "=", team_id);
        }

        let tickets = self
            .client
            .search_read(TICKET_MODEL, domain, &["stage_id"], SearchOptions::new())?;

        let mut counts: Vec<(String, usize)> = Vec::new();
        for ticket in &tickets {
            let stage = ticket
                .get("stage_id")
                .and_then(RpcValue::as_many2one)
                .map_or(UNKNOWN_STAGE, |(_, name)| name);

            match counts.iter_mut().find(|(name, _)| name.as_str() == stage) {
                Some((_, count)) => *count += 1,
                None => counts.push((stage.to_owned(), 1)),
            }
        }
        Ok(counts)
    }

    fn find_partner(&mut self, email: &str) -> Result<Option<i64>, ServiceError> {
        let ids = self.client.search(
            PARTNER_MODEL,
            Domain::new().filter("email", "=", email),
            SearchOptions::new().limit(1),
        )?;
        Ok(ids.first().copied())
    }

    fn find_or_create_partner(
        &mut self,
        email: &str,
        name: &str,
        phone: &str,
    ) -> Result<i64, ServiceError> {
        if let Some(partner_id) = self.find_partner(email)? {
            return Ok(partner_id);
        }

        let mut values = RpcStruct::new();
        values.insert("email".into(), email.into());
        values.insert("name".into(), if name.is_empty() { email } else { name }.into());
        if !phone.is_empty() {
            values.insert("phone".into(), phone.into());
        }

        let partner_id = self.client.create(PARTNER_MODEL, values)?;
        tracing::debug!(partner_id, "Partner created");
        Ok(partner_id)
    }
}
