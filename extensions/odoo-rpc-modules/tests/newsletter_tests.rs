use odoo_rpc_client::{ConnectionParameters, OdooClient, RpcStruct, RpcValue};
use odoo_rpc_modules::{
    ContactDetails, NewsletterApi, NewsletterForm, NewsletterSettings, ServiceError,
};
use odoo_rpc_transport::ScriptedTransport;

fn client(transport: &ScriptedTransport) -> OdooClient<&ScriptedTransport> {
    OdooClient::new(
        ConnectionParameters::new("https://erp.example.com", "prod", "bot", "key"),
        transport,
    )
}

fn record(pairs: Vec<(&str, RpcValue)>) -> RpcValue {
    RpcValue::Struct(pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
}

fn command(code: i64, id: i64) -> RpcValue {
    RpcValue::Array(vec![RpcValue::Array(vec![code.into(), id.into()])])
}

fn call(transport: &ScriptedTransport, index: usize) -> (String, Vec<RpcValue>, RpcStruct) {
    let params = transport.requests()[index].decode().unwrap().params;
    let method = params[4].as_str().unwrap().to_owned();
    let args = params[5].as_array().unwrap().to_vec();
    let kwargs = params
        .get(6)
        .and_then(RpcValue::as_struct)
        .cloned()
        .unwrap_or_default();
    (method, args, kwargs)
}

#[test]
fn test_mailing_lists_filters_active() {
    let transport = ScriptedTransport::new();
    transport.push_value(1).push_value(vec![record(vec![
        ("id", 5.into()),
        ("name", "Monthly".into()),
        ("contact_count", 120.into()),
    ])]);
    let mut client = client(&transport);

    let lists = NewsletterApi::new(&mut client).mailing_lists().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].contact_count, 120);
    assert!(lists[0].active);

    let (_, args, _) = call(&transport, 1);
    assert_eq!(
        args[0],
        RpcValue::Array(vec![RpcValue::Array(vec![
            "active".into(),
            "=".into(),
            true.into()
        ])])
    );
}

#[test]
fn test_mailing_list_reads_active_flag() {
    let transport = ScriptedTransport::new();
    transport.push_value(1).push_value(vec![record(vec![
        ("id", 6.into()),
        ("name", "Archive".into()),
        ("contact_count", 0.into()),
        ("active", false.into()),
    ])]);
    let mut client = client(&transport);

    let list = NewsletterApi::new(&mut client).mailing_list(6).unwrap();
    assert!(!list.active);
}

#[test]
fn test_subscribe_existing_contact_links_list() {
    let transport = ScriptedTransport::new();
    transport
        .push_value(1)
        .push_value(vec![record(vec![("id", 40.into())])])
        .push_value(true);
    let mut client = client(&transport);

    NewsletterApi::new(&mut client)
        .subscribe("ada@example.com", "Ada", 5, &ContactDetails::default())
        .unwrap();

    let (method, args, _) = call(&transport, 2);
    assert_eq!(method, "write");
    assert_eq!(
        args,
        vec![
            RpcValue::Array(vec![40.into()]),
            record(vec![("list_ids", command(4, 5))]),
        ]
    );
}

#[test]
fn test_subscribe_new_contact_with_details() {
    let transport = ScriptedTransport::new();
    transport
        .push_value(1)
        .push_value(Vec::<RpcValue>::new())
        .push_value(41);
    let mut client = client(&transport);

    let details = ContactDetails {
        phone: "+33 1 23".into(),
        company: "Acme".into(),
    };
    NewsletterApi::new(&mut client)
        .subscribe("ada@example.com", "", 5, &details)
        .unwrap();

    let (method, args, _) = call(&transport, 2);
    assert_eq!(method, "create");
    assert_eq!(
        args,
        vec![record(vec![
            ("email", "ada@example.com".into()),
            ("name", "ada@example.com".into()),
            ("list_ids", command(4, 5)),
            ("phone", "+33 1 23".into()),
            ("company_name", "Acme".into()),
        ])]
    );
}

#[test]
fn test_subscribe_rejects_missing_list() {
    let transport = ScriptedTransport::new();
    let mut client = client(&transport);

    let err = NewsletterApi::new(&mut client)
        .subscribe("ada@example.com", "", 0, &ContactDetails::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_subscribe_surfaces_rejected_write() {
    let transport = ScriptedTransport::new();
    transport
        .push_value(1)
        .push_value(vec![record(vec![("id", 40.into())])])
        .push_value(false);
    let mut client = client(&transport);

    let err = NewsletterApi::new(&mut client)
        .subscribe("ada@example.com", "", 5, &ContactDetails::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::Client(_)));
}

#[test]
fn test_unsubscribe_drops_list_link() {
    let transport = ScriptedTransport::new();
    transport
        .push_value(1)
        .push_value(vec![record(vec![("id", 40.into())])])
        .push_value(true);
    let mut client = client(&transport);

    NewsletterApi::new(&mut client)
        .unsubscribe("ada@example.com", 5)
        .unwrap();

    let (_, args, _) = call(&transport, 2);
    assert_eq!(args[1], record(vec![("list_ids", command(3, 5))]));
}

#[test]
fn test_unsubscribe_unknown_contact() {
    let transport = ScriptedTransport::new();
    transport.push_value(1).push_value(Vec::<RpcValue>::new());
    let mut client = client(&transport);

    let err = NewsletterApi::new(&mut client)
        .unsubscribe("ghost@example.com", 5)
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::NotFound {
            model: "mailing.contact",
            key: "ghost@example.com".into()
        }
    );
}

#[test]
fn test_is_subscribed_and_count() {
    let transport = ScriptedTransport::new();
    transport
        .push_value(1)
        .push_value(vec![record(vec![("id", 40.into())])])
        .push_value(Vec::<RpcValue>::new())
        .push_value(17);
    let mut client = client(&transport);
    let mut api = NewsletterApi::new(&mut client);

    assert_eq!(api.is_subscribed("ada@example.com", 5), Ok(true));
    assert_eq!(api.is_subscribed("bob@example.com", 5), Ok(false));
    assert_eq!(api.count_subscribers(5), Ok(17));

    let (method, args, _) = call(&transport, 3);
    assert_eq!(method, "search_count");
    assert_eq!(
        args[0],
        RpcValue::Array(vec![RpcValue::Array(vec![
            "list_ids".into(),
            "in".into(),
            RpcValue::Array(vec![5.into()])
        ])])
    );
}

#[test]
fn test_submit_falls_back_to_default_list() {
    let transport = ScriptedTransport::new();
    transport
        .push_value(1)
        .push_value(Vec::<RpcValue>::new())
        .push_value(41);
    let mut client = client(&transport);
    let settings = NewsletterSettings {
        default_list_id: 8,
        ..Default::default()
    };

    let form = NewsletterForm {
        email: "ada@example.com".into(),
        name: "Ada".into(),
        ..Default::default()
    };
    let outcome = NewsletterApi::new(&mut client).submit(&form, &settings);

    assert!(outcome.success);
    assert_eq!(outcome.message, "Thank you for subscribing!");

    let (_, args, _) = call(&transport, 2);
    assert_eq!(args[0].get("list_ids"), Some(&command(4, 8)));
}

#[test]
fn test_submit_without_any_list_fails_with_error_message() {
    let transport = ScriptedTransport::new();
    let mut client = client(&transport);
    let settings = NewsletterSettings::default();

    let form = NewsletterForm {
        email: "ada@example.com".into(),
        ..Default::default()
    };
    let outcome = NewsletterApi::new(&mut client).submit(&form, &settings);

    assert!(!outcome.success);
    assert_eq!(outcome.message, settings.error_message);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_submit_rejects_invalid_email() {
    let transport = ScriptedTransport::new();
    let mut client = client(&transport);

    let form = NewsletterForm {
        email: "ada@".into(),
        list_id: Some(5),
        ..Default::default()
    };
    let outcome = NewsletterApi::new(&mut client).submit(&form, &NewsletterSettings::default());
    assert_eq!(outcome.message, "Please enter a valid email address.");
}
