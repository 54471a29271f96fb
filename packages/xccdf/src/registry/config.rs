//! Content models of the XCCDF containers.
//!
//! Registration order is canonical export order. Groups and Rules share a
//! slot so a container keeps them in document order.

use std::sync::LazyLock;

use super::core::ContentModel;
use super::types::{ChildKind, Occurs};

static BENCHMARK: LazyLock<ContentModel> = LazyLock::new(create_benchmark_model);
static GROUP: LazyLock<ContentModel> = LazyLock::new(create_group_model);
static PROFILE: LazyLock<ContentModel> = LazyLock::new(create_profile_model);
static RULE: LazyLock<ContentModel> = LazyLock::new(create_rule_model);
static TAILORING: LazyLock<ContentModel> = LazyLock::new(create_tailoring_model);

/// Create the content model of `<Benchmark>`.
///
/// Follows the schema sequence, which places `version` after the
/// platforms.
#[must_use]
pub fn create_benchmark_model() -> ContentModel {
    let mut model = ContentModel::new("Benchmark");
    model
        .register(ChildKind::Status, Occurs::Many)
        .register(ChildKind::Title, Occurs::Many)
        .register(ChildKind::Description, Occurs::Many)
        .register(ChildKind::Notice, Occurs::Many)
        .register(ChildKind::FrontMatter, Occurs::Many)
        .register(ChildKind::RearMatter, Occurs::Many)
        .register(ChildKind::Platform, Occurs::Many)
        .register(ChildKind::Version, Occurs::AtMostOnce)
        .register(ChildKind::Profile, Occurs::Many)
        .register(ChildKind::Group, Occurs::Many)
        .register_interleaved(ChildKind::Rule, Occurs::Many)
        .require(
            &[ChildKind::Version],
            "a Benchmark must contain a version element",
        )
        .require(
            &[ChildKind::Status],
            "a Benchmark must contain at least a status element",
        )
        .require(
            &[ChildKind::Group, ChildKind::Rule],
            "a Benchmark must contain at least a group or a rule",
        );
    model
}

/// Create the content model of `<Group>`.
#[must_use]
pub fn create_group_model() -> ContentModel {
    let mut model = item_model("Group");
    model
        .register(ChildKind::Group, Occurs::Many)
        .register_interleaved(ChildKind::Rule, Occurs::Many)
        .require(
            &[ChildKind::Group, ChildKind::Rule],
            "a group must contain at least a group or a rule",
        );
    model
}

/// Create the content model of `<Profile>`.
#[must_use]
pub fn create_profile_model() -> ContentModel {
    let mut model = item_model("Profile");
    model
        .register(ChildKind::Select, Occurs::Many)
        .require(&[ChildKind::Title], "title element is required at least once");
    model
}

/// Create the content model of `<Rule>`.
#[must_use]
pub fn create_rule_model() -> ContentModel {
    let mut model = item_model("Rule");
    model.register(ChildKind::Ident, Occurs::Many);
    model
}

/// Create the content model of `<Tailoring>`.
#[must_use]
pub fn create_tailoring_model() -> ContentModel {
    let mut model = ContentModel::new("Tailoring");
    model
        .register(ChildKind::Status, Occurs::Many)
        .register(ChildKind::TailoringVersion, Occurs::AtMostOnce)
        .register(ChildKind::Profile, Occurs::Many)
        .require(&[ChildKind::TailoringVersion], "version element is required")
        .require(
            &[ChildKind::Profile],
            "Profile element is required at least once",
        );
    model
}

/// Shared head of Group, Profile and Rule.
fn item_model(container: &'static str) -> ContentModel {
    let mut model = ContentModel::new(container);
    model
        .register(ChildKind::Status, Occurs::Many)
        .register(ChildKind::Version, Occurs::AtMostOnce)
        .register(ChildKind::Title, Occurs::Many)
        .register(ChildKind::Description, Occurs::Many)
        .register(ChildKind::Platform, Occurs::Many);
    model
}

/// Shared content model of `<Benchmark>`.
pub(crate) fn benchmark_model() -> &'static ContentModel {
    &BENCHMARK
}

/// Shared content model of `<Group>`.
pub(crate) fn group_model() -> &'static ContentModel {
    &GROUP
}

/// Shared content model of `<Profile>`.
pub(crate) fn profile_model() -> &'static ContentModel {
    &PROFILE
}

/// Shared content model of `<Rule>`.
pub(crate) fn rule_model() -> &'static ContentModel {
    &RULE
}

/// Shared content model of `<Tailoring>`.
pub(crate) fn tailoring_model() -> &'static ContentModel {
    &TAILORING
}
