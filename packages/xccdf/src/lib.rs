//! XCCDF element binding - Import and export XCCDF checklists as typed
//! Rust objects.
//!
//! Each XCCDF element is represented by a typed node that can be built from
//! a parsed XML element or from scratch, validated against the element's
//! contract, edited in memory and exported back to an XML tree, a string
//! or a serializable dictionary.
//!
//! # Example
//!
//! ```
//! use xccdf::models::{Benchmark, Rule, Status, Version, XccdfNode};
//!
//! let mut benchmark = Benchmark::from_params("xccdf_org_benchmark_demo".to_string()).unwrap();
//! benchmark.add_child(Status::from_params("draft".to_string()).unwrap());
//! benchmark.add_child(Version::from_params("1.0".to_string()).unwrap());
//! benchmark.add_child(Rule::from_params("xccdf_org_rule_demo".to_string()).unwrap());
//!
//! let xml = benchmark.to_xml_string().unwrap();
//! let again = Benchmark::from_xml_str(&xml).unwrap();
//! assert!(benchmark.semantic_eq(&again));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespaces, value sets and the injectable [`Config`]
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Name resolution, the owned element tree and the writer
//! - [`registry`]: Content models and the child classifier
//! - [`models`]: Typed nodes, from `<status>` up to `<Benchmark>`
//! - [`document`]: Whole-document parsing

pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod registry;
pub mod xml;

// Re-export main entry points
pub use document::{parse_document, parse_document_with, Document};

// Re-export commonly used items
pub use config::{validate_tailoring_id, Config};
pub use error::{Result, XccdfError};
pub use models::{Benchmark, Element, ElementDict, Tailoring, XccdfNode};
