//! Error types for the XCCDF binding.
//!
//! Validation failures are raised synchronously while an element is being
//! constructed, either from a parsed document or from scratch parameters.
//! Infrastructure failures (parsing, writing, configuration loading) wrap
//! the error of the crate that produced them.

use thiserror::Error;

/// Main error type for the binding library.
#[derive(Debug, Error)]
pub enum XccdfError {
    /// Neither a source element nor the minimum scratch parameters were given.
    #[error("either an XML element or the construction parameters of <{element}> are required")]
    MissingConstructionInput { element: String },

    /// A mandatory attribute or leaf content is absent or empty.
    #[error("{attribute} attribute required on <{element}>")]
    RequiredAttributeMissing { element: String, attribute: String },

    /// A container's children violate its cardinality contract.
    #[error("<{element}> cardinality violated: {rule}")]
    Cardinality { element: String, rule: String },

    /// A constrained value lies outside its closed set.
    #[error("{value} is not a valid {attribute} for <{element}>. Must be one of: {}", .choices.join(", "))]
    InvalidEnumeratedValue {
        element: String,
        attribute: String,
        value: String,
        choices: Vec<String>,
    },

    /// An identifier does not follow its required structure.
    #[error("<{element}> id invalid format: '{value}'")]
    InvalidIdentifierFormat { element: String, value: String },

    /// A value could not be decoded into its typed form.
    #[error("invalid {attribute} on <{element}>: '{value}' ({reason})")]
    InvalidValue {
        element: String,
        attribute: String,
        value: String,
        reason: String,
    },

    /// A qualified name could not be split into namespace and tag. The
    /// parser accepts any namespace URI, so a URI containing `}` yields a
    /// Clark name with no unambiguous local part.
    #[error("Malformed element name: '{0}'")]
    MalformedName(String),

    /// Document root is not a supported container.
    #[error("Unsupported document root <{0}>. Expected <Benchmark> or <Tailoring>")]
    UnknownRoot(String),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// XML rendering failed.
    #[error("XML writing failed: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    /// Rendered output was not valid UTF-8.
    #[error("XML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// A pattern built from configuration could not be compiled.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON rendering of an element dictionary failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl XccdfError {
    /// Build a [`XccdfError::RequiredAttributeMissing`].
    pub fn required(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::RequiredAttributeMissing {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Build a [`XccdfError::Cardinality`].
    pub fn cardinality(element: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::Cardinality {
            element: element.into(),
            rule: rule.into(),
        }
    }

    /// Build a [`XccdfError::MissingConstructionInput`].
    pub fn missing_input(element: impl Into<String>) -> Self {
        Self::MissingConstructionInput {
            element: element.into(),
        }
    }
}

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, XccdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_attribute_display() {
        let err = XccdfError::required("Benchmark", "id");
        assert_eq!(err.to_string(), "id attribute required on <Benchmark>");
    }

    #[test]
    fn test_cardinality_display_names_rule() {
        let err = XccdfError::cardinality("Benchmark", "version element found more than once");
        assert_eq!(
            err.to_string(),
            "<Benchmark> cardinality violated: version element found more than once"
        );
    }

    #[test]
    fn test_enumerated_value_lists_choices() {
        let err = XccdfError::InvalidEnumeratedValue {
            element: "select".to_string(),
            attribute: "selected".to_string(),
            value: "maybe".to_string(),
            choices: vec!["true".to_string(), "false".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("maybe"));
        assert!(msg.contains("true, false"));
    }

    #[test]
    fn test_missing_input_display() {
        let err = XccdfError::missing_input("Rule");
        assert!(err.to_string().contains("<Rule>"));
    }
}
