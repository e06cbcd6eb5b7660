use odoo_rpc::value::RpcValue;

/// Builds one `(field, operator, value)` triplet of an Odoo domain.
pub fn condition(field: &str, operator: &str, value: impl Into<RpcValue>) -> RpcValue {
    RpcValue::Array(vec![field.into(), operator.into(), value.into()])
}

/// An Odoo search filter: a list of conditions combined with an implicit AND.
///
/// The empty domain matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Domain {
    terms: Vec<RpcValue>,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `(field, operator, value)` condition.
    pub fn filter(mut self, field: &str, operator: &str, value: impl Into<RpcValue>) -> Self {
        self.terms.push(condition(field, operator, value));
        self
    }

    /// Adds a raw term, e.g. a prefix operator such as `"|"`.
    pub fn push(mut self, term: impl Into<RpcValue>) -> Self {
        self.terms.push(term.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

impl From<Domain> for RpcValue {
    fn from(domain: Domain) -> Self {
        RpcValue::Array(domain.terms)
    }
}

impl From<Vec<RpcValue>> for Domain {
    fn from(terms: Vec<RpcValue>) -> Self {
        Self { terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builds_triplets_in_order() {
        let domain = Domain::new()
            .filter("email", "=", "a@b.c")
            .filter("list_ids", "in", vec![5]);

        assert_eq!(
            RpcValue::from(domain),
            RpcValue::Array(vec![
                RpcValue::Array(vec!["email".into(), "=".into(), "a@b.c".into()]),
                RpcValue::Array(vec![
                    "list_ids".into(),
                    "in".into(),
                    RpcValue::Array(vec![RpcValue::Int(5)])
                ]),
            ])
        );
    }

    #[test]
    fn test_empty_domain_is_empty_array() {
        assert_eq!(RpcValue::from(Domain::new()), RpcValue::Array(vec![]));
    }
}
