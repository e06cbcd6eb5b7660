use crate::ServiceError;
use crate::records;
use odoo_rpc_client::RpcStruct;

/// A `mailing.list` record.
#[derive(Debug, Clone, PartialEq)]
pub struct MailingList {
    pub id: i64,
    pub name: String,
    pub contact_count: i64,
    pub active: bool,
}

impl MailingList {
    pub(crate) fn from_record(record: &RpcStruct) -> Result<Self, ServiceError> {
        Ok(Self {
            id: records::id(record, "mailing.list")?,
            name: records::text(record, "name"),
            contact_count: records::int(record, "contact_count"),
            // Only requested when reading a single list; the listing is filtered on it.
            active: record.get("active").is_none_or(|v| v.is_truthy()),
        })
    }
}

/// Optional contact data stored when a subscription creates a new contact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub phone: String,
    pub company: String,
}
