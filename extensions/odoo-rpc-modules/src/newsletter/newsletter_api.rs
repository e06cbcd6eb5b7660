use super::mailing_list::{ContactDetails, MailingList};
use crate::ServiceError;
use crate::records::{self, link_command, unlink_command};
use odoo_rpc_client::{Domain, OdooClient, RpcStruct, RpcValue, SearchOptions};
use odoo_rpc_transport::RpcTransport;

pub const LIST_MODEL: &str = "mailing.list";
pub const CONTACT_MODEL: &str = "mailing.contact";

/// Newsletter operations on mailing lists and their contacts.
pub struct NewsletterApi<'a, T: RpcTransport> {
    client: &'a mut OdooClient<T>,
}

impl<'a, T: RpcTransport> NewsletterApi<'a, T> {
    pub fn new(client: &'a mut OdooClient<T>) -> Self {
        Self { client }
    }

    /// Active mailing lists.
    pub fn mailing_lists(&mut self) -> Result<Vec<MailingList>, ServiceError> {
        self.client
            .search_read(
                LIST_MODEL,
                Domain::new().filter("active", "=", true),
                &["id", "name", "contact_count"],
                SearchOptions::new(),
            )?
            .iter()
            .map(MailingList::from_record)
            .collect()
    }

    pub fn mailing_list(&mut self, list_id: i64) -> Result<MailingList, ServiceError> {
        let records = self.client.read(
            LIST_MODEL,
            &[list_id],
            &["id", "name", "contact_count", "active"],
        )?;
        match records.first() {
            Some(record) => MailingList::from_record(record),
            None => Err(ServiceError::not_found(LIST_MODEL, list_id)),
        }
    }

    /// Adds `email` to `list_id`, creating the contact if it does not exist.
    ///
    /// `name` falls back to the email for new contacts; `details` are only
    /// used on creation.
    pub fn subscribe(
        &mut self,
        email: &str,
        name: &str,
        list_id: i64,
        details: &ContactDetails,
    ) -> Result<(), ServiceError> {
        validate(email, list_id)?;

        if let Some(contact_id) = self.find_contact(email, &["id", "list_ids", "subscription_list_ids"])? {
            self.client.write(
                CONTACT_MODEL,
                &[contact_id],
                list_ids(link_command(list_id)),
            )?;
            tracing::info!(contact_id, list_id, "Existing contact subscribed");
            return Ok(());
        }

        let mut values = RpcStruct::new();
        values.insert("email".into(), email.into());
        values.insert("name".into(), if name.is_empty() { email } else { name }.into());
        values.insert("list_ids".into(), link_command(list_id));
        if !details.phone.is_empty() {
            values.insert("phone".into(), RpcValue::from(&details.phone));
        }
        if !details.company.is_empty() {
            values.insert("company_name".into(), RpcValue::from(&details.company));
        }

        let contact_id = self.client.create(CONTACT_MODEL, values)?;
        tracing::info!(contact_id, list_id, "New contact subscribed");
        Ok(())
    }

    /// Removes `email` from `list_id`. The contact itself is kept.
    pub fn unsubscribe(&mut self, email: &str, list_id: i64) -> Result<(), ServiceError> {
        validate(email, list_id)?;

        let contact_id = self
            .find_contact(email, &["id", "list_ids"])?
            .ok_or_else(|| ServiceError::not_found(CONTACT_MODEL, email))?;

        self.client.write(
            CONTACT_MODEL,
            &[contact_id],
            list_ids(unlink_command(list_id)),
        )?;
        tracing::info!(contact_id, list_id, "Contact unsubscribed");
        Ok(())
    }

    pub fn is_subscribed(&mut self, email: &str, list_id: i64) -> Result<bool, ServiceError> {
        let contacts = self.client.search_read(
            CONTACT_MODEL,
            Domain::new()
                .filter("email", "=", email)
                .filter("list_ids", "in", vec![list_id]),
            &["id"],
            SearchOptions::new(),
        )?;
        Ok(!contacts.is_empty())
    }

    pub fn count_subscribers(&mut self, list_id: i64) -> Result<i64, ServiceError> {
        Ok(self.client.search_count(
            CONTACT_MODEL,
            Domain::new().filter("list_ids", "in", vec![list_id]),
        )?)
    }

    fn find_contact(&mut self, email: &str, fields: &[&str]) -> Result<Option<i64>, ServiceError> {
        let contacts = self.client.search_read(
            CONTACT_MODEL,
            Domain::new().filter("email", "=", email),
            fields,
            SearchOptions::new(),
        )?;
        contacts
            .first()
            .map(|contact| records::id(contact, CONTACT_MODEL))
            .transpose()
    }
}

fn validate(email: &str, list_id: i64) -> Result<(), ServiceError> {
    if email.is_empty() || list_id <= 0 {
        return Err(ServiceError::Validation(
            "An email address and a mailing list are required.".to_owned(),
        ));
    }
    Ok(())
}

fn list_ids(command: RpcValue) -> RpcStruct {
    let mut values = RpcStruct::new();
    values.insert("list_ids".into(), command);
    values
}
