use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
    net::IpAddr,
};

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_DATE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
pub const INVALID_TIME: &str =
    "Time has wrong format. Use one of these formats instead: hh:mm[:ss[.uuuuuu]].";

lazy_static! {
    static ref USER_RE: Regex =
        Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$").unwrap();
    static ref DOMAIN_RE: Regex = Regex::new(
        r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])$"
    )
    .unwrap();
    static ref LITERAL_RE: Regex = Regex::new(r"^\[([A-Fa-f0-9:.]+)\]$").unwrap();
}

/// Checks the syntax of an e-mail address.
///
/// The domain may be a dotted host name (internationalized names are
/// IDNA-encoded first), `localhost`, or a bracketed IP literal.
pub fn is_valid_email(email: &str) -> bool {
    let Some((user, domain)) = email.rsplit_once('@') else {
        return false;
    };

    USER_RE.is_match(user) && is_valid_domain(domain)
}

fn is_valid_domain(domain: &str) -> bool {
    if domain == "localhost" || DOMAIN_RE.is_match(domain) {
        return true;
    }

    if let Some(literal) = LITERAL_RE.captures(domain) {
        return literal[1].parse::<IpAddr>().is_ok();
    }

    if domain.is_ascii() {
        return false;
    }

    idna::domain_to_ascii(domain).is_ok_and(|ascii| DOMAIN_RE.is_match(&ascii))
}

pub fn too_long(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

/// Field-level validation failures, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("ops@localhost"));
    }

    #[test]
    fn test_punycode_and_numeric_tlds() {
        assert!(is_valid_email("user@example.xn--p1ai"));
        assert!(is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("user@example.-com"));
        assert!(!is_valid_email("user@example.com-"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_internationalized_domains() {
        assert!(is_valid_email("user@bücher.de"));
        assert!(is_valid_email("user@пример.рф"));
        assert!(!is_valid_email("user@bücher"));
    }

    #[test]
    fn test_ip_literals() {
        assert!(is_valid_email("user@[127.0.0.1]"));
        assert!(is_valid_email("user@[::1]"));
        assert!(!is_valid_email("user@[999.1.1.1]"));
        assert!(!is_valid_email("user@[not-an-ip]"));
        assert!(!is_valid_email("user@127.0.0.1]"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("dot.@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("email", INVALID_EMAIL);
        errors.add("name", REQUIRED);
        errors.add("name", too_long(100));

        assert!(errors.contains("email"));
        assert_eq!(errors.messages("name").len(), 2);
        assert!(errors.messages("phone").is_empty());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "name"]);
    }

    #[test]
    fn test_errors_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.add("email", INVALID_EMAIL);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "email": [INVALID_EMAIL] }));
    }
}
