//! Resource records managed by the registry.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ErrorInfo, PvrError};
use crate::version::{Bump, Version};

/// Lifecycle stage of a resource. Any transition between stages is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Newly created, not yet reviewed.
    Unstable,
    /// Under review.
    Draft,
    /// Approved for use.
    Stable,
    /// Scheduled for removal.
    Deprecated,
}

impl Status {
    /// All statuses in canonical display order.
    pub const ALL: [Status; 4] = [
        Status::Unstable,
        Status::Draft,
        Status::Stable,
        Status::Deprecated,
    ];

    /// Lowercase label used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unstable => "unstable",
            Status::Draft => "draft",
            Status::Stable => "stable",
            Status::Deprecated => "deprecated",
        }
    }

    /// Parses a lowercase status label.
    pub fn parse(input: &str) -> Result<Self, PvrError> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == input)
            .ok_or_else(|| {
                PvrError::Query(
                    ErrorInfo::new("pvr_core.unknown_status", format!("unknown status '{input}'"))
                        .with_hint("expected one of unstable, draft, stable, deprecated"),
                )
            })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prompt template bound to an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Version of this record.
    pub version: Version,
    /// How this version relates to its predecessor.
    pub bump: Bump,
    /// Lifecycle stage.
    pub status: Status,
    /// Persona or account associated with the record.
    pub member: String,
    /// Optional owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Category key.
    #[serde(rename = "type")]
    pub prompt_type: String,
    /// Template text containing `{{placeholder}}` tokens.
    pub template: String,
    /// Consumer identifier.
    pub agent: String,
}

/// JSON validation definition identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Version of this record.
    pub version: Version,
    /// How this version relates to its predecessor.
    pub bump: Bump,
    /// Lifecycle stage.
    pub status: Status,
    /// Persona or account associated with the record.
    pub member: String,
    /// Optional owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Identity key.
    pub name: String,
    /// Arbitrary JSON definition.
    pub definition: Value,
}

/// The two resource families held by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// [`Prompt`] records.
    Prompt,
    /// [`Schema`] records.
    Schema,
}

impl ResourceKind {
    /// Capitalised label used in notices.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Prompt => "Prompt",
            ResourceKind::Schema => "Schema",
        }
    }
}

/// Record fields addressable by filters, sorting and option listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Prompt category.
    Type,
    /// Prompt consumer.
    Agent,
    /// Prompt template body.
    Template,
    /// Schema identity.
    Name,
    /// Record version.
    Version,
    /// Lifecycle stage.
    Status,
    /// Associated member.
    Member,
    /// Optional owner.
    Owner,
    /// Bump label.
    Bump,
}

impl Field {
    /// Lowercase field name as used by sort requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Agent => "agent",
            Field::Template => "template",
            Field::Name => "name",
            Field::Version => "version",
            Field::Status => "status",
            Field::Member => "member",
            Field::Owner => "owner",
            Field::Bump => "bump",
        }
    }

    /// Resolves a lowercase field name.
    pub fn parse(input: &str) -> Option<Self> {
        [
            Field::Type,
            Field::Agent,
            Field::Template,
            Field::Name,
            Field::Version,
            Field::Status,
            Field::Member,
            Field::Owner,
            Field::Bump,
        ]
        .into_iter()
        .find(|field| field.as_str() == input)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a record field, borrowed from the record where possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Optional field that is not set.
    Absent,
    /// Textual value.
    Text(&'a str),
    /// Version value.
    Version(Version),
}

impl FieldValue<'_> {
    /// Renders the value as text; absent values render empty.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Absent => Cow::Borrowed(""),
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Version(version) => Cow::Owned(version.to_string()),
        }
    }
}

/// Anything that carries a [`Version`].
pub trait Versioned {
    /// Returns the record's version.
    fn version(&self) -> &Version;
}

/// Behaviour shared by prompts and schemas.
pub trait Resource: Versioned {
    /// Family of the record.
    const KIND: ResourceKind;
    /// Fields the record exposes for sorting.
    const FIELDS: &'static [Field];

    /// Lifecycle stage.
    fn status(&self) -> Status;
    /// Associated member.
    fn member(&self) -> &str;
    /// Key used to bucket records before latest-version reduction.
    fn group_key(&self) -> String;
    /// Human readable identity used in notices and error context.
    fn display_name(&self) -> String;
    /// Text fields searched by free-text filters.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
    /// Returns the value of `field`, or `None` when the record has no such field.
    fn field(&self, field: Field) -> Option<FieldValue<'_>>;
}

impl Versioned for Prompt {
    fn version(&self) -> &Version {
        &self.version
    }
}

impl Versioned for Schema {
    fn version(&self) -> &Version {
        &self.version
    }
}

fn shared_field<'a>(
    field: Field,
    version: &Version,
    bump: Bump,
    status: Status,
    member: &'a str,
    owner: Option<&'a str>,
) -> Option<FieldValue<'a>> {
    match field {
        Field::Version => Some(FieldValue::Version(*version)),
        Field::Bump => Some(FieldValue::Text(bump.as_str())),
        Field::Status => Some(FieldValue::Text(status.as_str())),
        Field::Member => Some(FieldValue::Text(member)),
        Field::Owner => Some(owner.map_or(FieldValue::Absent, FieldValue::Text)),
        _ => None,
    }
}

impl Resource for Prompt {
    const KIND: ResourceKind = ResourceKind::Prompt;
    const FIELDS: &'static [Field] = &[
        Field::Type,
        Field::Agent,
        Field::Version,
        Field::Status,
        Field::Member,
        Field::Owner,
        Field::Bump,
        Field::Template,
    ];

    fn status(&self) -> Status {
        self.status
    }

    fn member(&self) -> &str {
        &self.member
    }

    fn group_key(&self) -> String {
        format!("{}-{}", self.prompt_type, self.agent)
    }

    fn display_name(&self) -> String {
        format!("{} ({}) v{}", self.prompt_type, self.agent, self.version)
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.agent.as_str()),
            Cow::Borrowed(self.prompt_type.as_str()),
            Cow::Borrowed(self.template.as_str()),
        ]
    }

    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Type => Some(FieldValue::Text(&self.prompt_type)),
            Field::Agent => Some(FieldValue::Text(&self.agent)),
            Field::Template => Some(FieldValue::Text(&self.template)),
            Field::Name => None,
            other => shared_field(
                other,
                &self.version,
                self.bump,
                self.status,
                &self.member,
                self.owner.as_deref(),
            ),
        }
    }
}

impl Resource for Schema {
    const KIND: ResourceKind = ResourceKind::Schema;
    const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Version,
        Field::Status,
        Field::Member,
        Field::Owner,
        Field::Bump,
    ];

    fn status(&self) -> Status {
        self.status
    }

    fn member(&self) -> &str {
        &self.member
    }

    fn group_key(&self) -> String {
        self.name.clone()
    }

    fn display_name(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Owned(self.definition.to_string()),
        ]
    }

    fn field(&self, field: Field) -> Option<FieldValue<'_>> {
        match field {
            Field::Name => Some(FieldValue::Text(&self.name)),
            Field::Type | Field::Agent | Field::Template => None,
            other => shared_field(
                other,
                &self.version,
                self.bump,
                self.status,
                &self.member,
                self.owner.as_deref(),
            ),
        }
    }
}
