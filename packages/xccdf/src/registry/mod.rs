//! Content model registry for XCCDF containers.
//!
//! Each container registers the child tags it accepts, with an occurrence
//! bound and a canonical slot. The classifier walks a parsed container,
//! imports every known child, enforces the bounds and returns the children
//! in canonical order.

mod config;
mod core;
mod engine;
mod types;

pub use config::{
    create_benchmark_model, create_group_model, create_profile_model, create_rule_model,
    create_tailoring_model,
};
pub(crate) use config::{benchmark_model, group_model, profile_model, rule_model, tailoring_model};
pub use core::ContentModel;
pub use engine::Classifier;
pub use types::{ChildKind, MinimumRule, Occurs, SlotSpec};
