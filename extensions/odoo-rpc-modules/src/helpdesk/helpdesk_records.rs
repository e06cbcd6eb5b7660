use crate::ServiceError;
use crate::records;
use chrono::NaiveDateTime;
use odoo_rpc_client::RpcStruct;

/// A `helpdesk.team` record.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub name: String,

    /// Whether the team accepts tickets from the website form.
    pub use_website_form: bool,
}

impl Team {
    pub(crate) fn from_record(record: &RpcStruct) -> Result<Self, ServiceError> {
        Ok(Self {
            id: records::id(record, "helpdesk.team")?,
            name: records::text(record, "name"),
            use_website_form: records::flag(record, "use_website_helpdesk_form"),
        })
    }
}

/// A `helpdesk.ticket` record. Fields that were not requested stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub partner: Option<(i64, String)>,
    pub team: Option<(i64, String)>,
    pub stage: Option<(i64, String)>,
    pub priority: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Ticket {
    pub(crate) fn from_record(record: &RpcStruct) -> Result<Self, ServiceError> {
        Ok(Self {
            id: records::id(record, "helpdesk.ticket")?,
            subject: records::text(record, "name"),
            description: records::text(record, "description"),
            partner: records::many2one(record, "partner_id"),
            team: records::many2one(record, "team_id"),
            stage: records::many2one(record, "stage_id"),
            priority: records::text(record, "priority"),
            created_at: records::datetime(record, "create_date"),
        })
    }

    pub fn stage_name(&self) -> Option<&str> {
        self.stage.as_ref().map(|(_, name)| name.as_str())
    }
}

/// Input for [`HelpdeskApi::create_ticket`](crate::HelpdeskApi::create_ticket).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub email: String,

    /// Contact name; the email is used when empty.
    pub name: String,
    pub phone: String,
    pub subject: String,
    pub description: String,

    /// Odoo priority code, `"0"` to `"3"`; `"2"` unless set.
    pub priority: String,

    /// Team to file the ticket under; `None` or a non-positive id leaves it unassigned.
    pub team_id: Option<i64>,
}

impl NewTicket {
    pub fn new(email: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn priority(mut self, priority: impl ToString) -> Self {
        self.priority = priority.to_string();
        self
    }

    pub fn team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

impl Default for NewTicket {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            subject: String::new(),
            description: String::new(),
            priority: "2".to_owned(),
            team_id: None,
        }
    }
}
