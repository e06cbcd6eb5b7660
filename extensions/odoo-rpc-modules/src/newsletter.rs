mod mailing_list;
mod newsletter_api;
mod newsletter_form;

pub use mailing_list::{ContactDetails, MailingList};
pub use newsletter_api::{CONTACT_MODEL, LIST_MODEL, NewsletterApi};
pub use newsletter_form::{NewsletterForm, NewsletterSettings};
