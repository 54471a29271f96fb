//! Configuration constants and validation functions for the binding.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, XccdfError};

/// XCCDF checklist namespace, used as the default (unprefixed) namespace.
pub const XCCDF_NAMESPACE: &str = "http://checklists.nist.gov/xccdf/1.1";

/// Namespace bound to the reserved `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XHTML namespace used for mixed-content payloads.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Default prefix carrying XHTML markup inside XCCDF text elements.
pub const DEFAULT_MARKUP_PREFIX: &str = "html";

/// Namespace map attached to every freshly created element.
///
/// Order matters: when two prefixes share a URI the first one wins during
/// export, and the unprefixed entry is always preferred for elements.
pub const NSMAP: &[(Option<&str>, &str)] = &[
    (None, XCCDF_NAMESPACE),
    (Some("cdf"), XCCDF_NAMESPACE),
    (Some("cpe"), "http://cpe.mitre.org/dictionary/2.0"),
    (Some("cpel"), "http://cpe.mitre.org/language/2.0"),
    (Some("dc"), "http://purl.org/dc/elements/1.1/"),
    (Some("dsig"), "http://www.w3.org/2000/09/xmldsig#"),
    (Some("xsi"), "http://www.w3.org/2001/XMLSchema-instance"),
    (Some("xhtml"), XHTML_NAMESPACE),
    (Some(DEFAULT_MARKUP_PREFIX), XHTML_NAMESPACE),
];

/// Attribute names that live in the `xml` namespace when set from scratch.
const XML_ATTRIBUTES: &[&str] = &["lang", "space", "base"];

/// Timestamp format used when encoding `time` attributes.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date format used when encoding `date` attributes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lexical values accepted for XCCDF booleans.
pub const BOOLEAN_CHOICES: &[&str] = &["true", "1", "false", "0"];

/// Tailoring identifier pattern: `xccdf_<org>_tailoring_<name>`. The org
/// segment is a reverse-DNS name and may not contain `_`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAILORING_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^xccdf_[^_\s]+_tailoring_\S+$").expect("valid regex"));

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

static DEFAULT_CONFIG: LazyLock<Config> = LazyLock::new(Config::default);

/// Injectable binding configuration.
///
/// Covers the value sets the XCCDF schema leaves to the implementation:
/// the status enumeration, which attributes are coerced to booleans or
/// numbers, and the prefix used to embed XHTML in text elements.
///
/// # Examples
/// ```
/// use xccdf::config::Config;
///
/// let config = Config::from_yaml_str("status_values: [draft, accepted]").unwrap();
/// assert!(config.is_valid_status("draft"));
/// assert!(!config.is_valid_status("interim"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Valid `<status>` values.
    pub status_values: Vec<String>,

    /// Attributes that must hold an XCCDF boolean.
    pub boolean_attributes: Vec<String>,

    /// Attributes that must hold a decimal number.
    pub numeric_attributes: Vec<String>,

    /// Prefix carrying XHTML markup in mixed-content elements.
    pub markup_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_values: ["accepted", "deprecated", "draft", "incomplete", "interim"]
                .into_iter()
                .map(String::from)
                .collect(),
            boolean_attributes: [
                "abstract",
                "prohibitChanges",
                "hidden",
                "selected",
                "resolved",
                "override",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            numeric_attributes: vec!["weight".to_string()],
            markup_prefix: DEFAULT_MARKUP_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Process-wide default configuration.
    #[must_use]
    pub fn shared() -> &'static Config {
        &DEFAULT_CONFIG
    }

    /// Load configuration from a YAML document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        if config.markup_prefix.is_empty() || config.markup_prefix.contains(':') {
            return Err(XccdfError::InvalidValue {
                element: "config".to_string(),
                attribute: "markup_prefix".to_string(),
                value: config.markup_prefix,
                reason: "expected a non-empty XML prefix".to_string(),
            });
        }
        Ok(config)
    }

    /// Check a `<status>` value against the configured set.
    #[must_use]
    pub fn is_valid_status(&self, state: &str) -> bool {
        self.status_values.iter().any(|s| s == state)
    }

    /// Check whether an attribute is coerced to a boolean.
    #[must_use]
    pub fn is_boolean_attribute(&self, name: &str) -> bool {
        self.boolean_attributes.iter().any(|a| a == name)
    }

    /// Check whether an attribute is coerced to a number.
    #[must_use]
    pub fn is_numeric_attribute(&self, name: &str) -> bool {
        self.numeric_attributes.iter().any(|a| a == name)
    }
}

/// Namespace implied for an attribute set by local name only.
///
/// # Examples
/// ```
/// use xccdf::config::{implied_attribute_namespace, XML_NAMESPACE};
///
/// assert_eq!(implied_attribute_namespace("lang"), Some(XML_NAMESPACE));
/// assert_eq!(implied_attribute_namespace("id"), None);
/// ```
#[must_use]
pub fn implied_attribute_namespace(name: &str) -> Option<&'static str> {
    XML_ATTRIBUTES.contains(&name).then_some(XML_NAMESPACE)
}

/// Validate a Tailoring identifier.
///
/// # Examples
/// ```
/// use xccdf::config::validate_tailoring_id;
///
/// assert!(validate_tailoring_id("xccdf_org_tailoring_name").is_ok());
/// assert!(validate_tailoring_id("not_a_valid_id").is_err());
/// ```
pub fn validate_tailoring_id(id: &str) -> Result<()> {
    if TAILORING_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(XccdfError::InvalidIdentifierFormat {
            element: "Tailoring".to_string(),
            value: id.to_string(),
        })
    }
}

/// Parse an XCCDF boolean (`true`, `1`, `false`, `0`).
#[must_use]
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse an XML Schema `dateTime`.
///
/// Accepts the local form (`2015-01-20T10:11:12`, optionally with fractional
/// seconds) and the offset form (`2015-01-20T10:11:12+01:00` or `Z`). The
/// offset is dropped: the binding keeps wall-clock time as written.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Encode a timestamp in the canonical `time` attribute form.
#[must_use]
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Encode a date in the canonical `date` attribute form.
#[must_use]
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
