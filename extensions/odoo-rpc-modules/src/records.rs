use crate::ServiceError;
use chrono::NaiveDateTime;
use odoo_rpc_client::{OdooError, RpcStruct, RpcValue};

/// Odoo's wire format for datetime fields (always UTC).
pub(crate) const ODOO_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn id(record: &RpcStruct, method: &str) -> Result<i64, ServiceError> {
    match record.get("id") {
        Some(RpcValue::Int(id)) => Ok(*id),
        other => Err(OdooError::UnexpectedResult {
            method: method.to_owned(),
            expected: "record with an integer id",
            found: other.map_or("nothing", RpcValue::kind_name),
        }
        .into()),
    }
}

/// A text field; Odoo's `false` for unset fields reads as empty.
pub(crate) fn text(record: &RpcStruct, field: &str) -> String {
    record
        .get(field)
        .and_then(RpcValue::as_str)
        .unwrap_or_default()
        .to_owned()
}

pub(crate) fn int(record: &RpcStruct, field: &str) -> i64 {
    record.get(field).and_then(RpcValue::as_i64).unwrap_or_default()
}

pub(crate) fn flag(record: &RpcStruct, field: &str) -> bool {
    record.get(field).is_some_and(RpcValue::is_truthy)
}

pub(crate) fn many2one(record: &RpcStruct, field: &str) -> Option<(i64, String)> {
    record
        .get(field)
        .and_then(RpcValue::as_many2one)
        .map(|(id, name)| (id, name.to_owned()))
}

pub(crate) fn datetime(record: &RpcStruct, field: &str) -> Option<NaiveDateTime> {
    let raw = record.get(field).and_then(RpcValue::as_str)?;
    NaiveDateTime::parse_from_str(raw, ODOO_DATETIME_FORMAT)
        .inspect_err(|err| tracing::debug!(field, raw, error = %err, "Unparseable datetime"))
        .ok()
}

/// `[(4, id)]`: link an existing record into a many2many field.
pub(crate) fn link_command(id: i64) -> RpcValue {
    RpcValue::Array(vec![RpcValue::Array(vec![4.into(), id.into()])])
}

/// `[(3, id)]`: drop a record from a many2many field without deleting it.
pub(crate) fn unlink_command(id: i64) -> RpcValue {
    RpcValue::Array(vec![RpcValue::Array(vec![3.into(), id.into()])])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: Vec<(&str, RpcValue)>) -> RpcStruct {
        pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn test_unset_fields_read_as_empty() {
        let rec = record(vec![
            ("description", false.into()),
            ("team_id", false.into()),
            ("create_date", false.into()),
        ]);

        assert_eq!(text(&rec, "description"), "");
        assert_eq!(many2one(&rec, "team_id"), None);
        assert_eq!(datetime(&rec, "create_date"), None);
        assert!(!flag(&rec, "missing"));
    }

    #[test]
    fn test_datetime_parses_odoo_format() {
        let rec = record(vec![("create_date", "2024-03-01 09:30:00".into())]);
        let parsed = datetime(&rec, "create_date").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-01 09:30:00");
    }

    #[test]
    fn test_id_requires_integer() {
        assert_eq!(id(&record(vec![("id", 8.into())]), "read"), Ok(8));
        assert!(id(&record(vec![("id", "8".into())]), "read").is_err());
        assert!(id(&RpcStruct::new(), "read").is_err());
    }
}
