//! Create, new-version and edit workflows for prompts and schemas.
//!
//! A draft holds form-like editable state. Submitting validates it and returns
//! the record that would be stored together with the user-facing notice; the
//! catalog is only ever read.

use pvr_core::errors::{ErrorInfo, PvrError};
use pvr_core::{Bump, Prompt, Schema, Status, Version};
use pvr_query::find_latest_version;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftKind {
    Create,
    NewVersion,
    Edit,
}

/// Version and bump of the record a draft was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBase {
    pub version: Version,
    pub bump: Bump,
}

impl DraftBase {
    /// Bump recorded on submission. Edits that keep the version keep the old bump.
    fn bump_for(base: Option<&DraftBase>, kind: DraftKind, version: &Version) -> Bump {
        match base {
            None => Bump::Major,
            Some(base) if kind == DraftKind::Edit && base.version == *version => base.bump,
            Some(base) => version.bump_from(&base.version),
        }
    }
}

/// Confirmation shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Validated record plus its notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission<T> {
    pub record: T,
    pub notice: Notice,
}

fn draft_error(code: &str, message: impl Into<String>) -> PvrError {
    PvrError::Draft(ErrorInfo::new(code, message))
}

fn require(field: &str, value: &str) -> Result<(), PvrError> {
    if value.trim().is_empty() {
        return Err(draft_error(
            "pvr_registry.draft_missing_field",
            format!("{field} must not be empty"),
        )
        .with_context("field", field));
    }
    Ok(())
}

fn parse_draft_version(raw: &str) -> Result<Version, PvrError> {
    Version::parse(raw.trim()).map_err(|err| err.with_context("field", "version"))
}

fn owner_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
    pub kind: DraftKind,
    #[serde(rename = "type")]
    pub prompt_type: String,
    pub agent: String,
    pub version: String,
    pub template: String,
    pub owner: String,
    pub status: Status,
    pub base: Option<DraftBase>,
}

impl PromptDraft {
    pub fn blank() -> Self {
        Self {
            kind: DraftKind::Create,
            prompt_type: String::new(),
            agent: String::new(),
            version: Version::INITIAL.to_string(),
            template: String::new(),
            owner: String::new(),
            status: Status::Unstable,
            base: None,
        }
    }

    /// New prompt for an existing type, seeded from the latest prompt of that type.
    ///
    /// The agent is left for the caller to choose; versions are looked up by
    /// type alone, whichever agent they belong to.
    pub fn for_existing_type(catalog: &Catalog, prompt_type: &str) -> Self {
        let same_type = |p: &Prompt| p.prompt_type == prompt_type;
        let latest_version = find_latest_version(&catalog.prompts, same_type);
        let latest = catalog
            .prompts
            .iter()
            .filter(|p| p.prompt_type == prompt_type)
            .find(|p| p.version == latest_version);
        Self {
            prompt_type: prompt_type.to_string(),
            version: latest_version.next_patch().to_string(),
            template: latest.map(|p| p.template.clone()).unwrap_or_default(),
            base: latest.map(|p| DraftBase {
                version: p.version,
                bump: p.bump,
            }),
            ..Self::blank()
        }
    }

    pub fn new_version_of(prompt: &Prompt) -> Self {
        Self {
            kind: DraftKind::NewVersion,
            version: prompt.version.next_patch().to_string(),
            status: Status::Unstable,
            ..Self::edit_of(prompt)
        }
    }

    pub fn edit_of(prompt: &Prompt) -> Self {
        Self {
            kind: DraftKind::Edit,
            prompt_type: prompt.prompt_type.clone(),
            agent: prompt.agent.clone(),
            version: prompt.version.to_string(),
            template: prompt.template.clone(),
            owner: prompt.owner.clone().unwrap_or_default(),
            status: prompt.status,
            base: Some(DraftBase {
                version: prompt.version,
                bump: prompt.bump,
            }),
        }
    }

    pub fn submit(&self, member: &str) -> Result<Submission<Prompt>, PvrError> {
        require("type", &self.prompt_type)?;
        require("agent", &self.agent)?;
        require("member", member)?;
        let version = parse_draft_version(&self.version)?;

        let record = Prompt {
            version,
            bump: DraftBase::bump_for(self.base.as_ref(), self.kind, &version),
            status: self.status,
            member: member.to_string(),
            owner: owner_from(&self.owner),
            prompt_type: self.prompt_type.trim().to_string(),
            template: self.template.clone(),
            agent: self.agent.trim().to_string(),
        };
        let notice = match self.kind {
            DraftKind::Create => Notice::new(
                "New prompt created successfully",
                "The prompt has been created with unstable status.",
            ),
            DraftKind::NewVersion => Notice::new(
                "New prompt version created successfully",
                format!("New version of {} prompt has been created.", record.prompt_type),
            ),
            DraftKind::Edit => Notice::new(
                "Prompt updated successfully",
                format!(
                    "Prompt {} for {} has been updated.",
                    record.prompt_type, record.agent
                ),
            ),
        };
        tracing::debug!(kind = ?self.kind, version = %record.version, "prompt draft submitted");
        Ok(Submission { record, notice })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDraft {
    pub kind: DraftKind,
    pub name: String,
    pub version: String,
    /// Definition as editable JSON text.
    pub definition: String,
    pub owner: String,
    pub status: Status,
    pub base: Option<DraftBase>,
}

impl SchemaDraft {
    pub fn blank() -> Self {
        Self {
            kind: DraftKind::Create,
            name: String::new(),
            version: Version::INITIAL.to_string(),
            definition: "{}".to_string(),
            owner: String::new(),
            status: Status::Unstable,
            base: None,
        }
    }

    /// New schema under an existing name, seeded from its latest version.
    pub fn for_existing_name(catalog: &Catalog, name: &str) -> Self {
        let same_name = |s: &Schema| s.name == name;
        let latest_version = find_latest_version(&catalog.schemas, same_name);
        let latest = catalog
            .schemas
            .iter()
            .filter(|s| s.name == name)
            .find(|s| s.version == latest_version);
        Self {
            name: name.to_string(),
            version: latest_version.next_patch().to_string(),
            definition: latest
                .map(|s| pretty(&s.definition))
                .unwrap_or_else(|| "{}".to_string()),
            base: latest.map(|s| DraftBase {
                version: s.version,
                bump: s.bump,
            }),
            ..Self::blank()
        }
    }

    pub fn new_version_of(schema: &Schema) -> Self {
        Self {
            kind: DraftKind::NewVersion,
            version: schema.version.next_patch().to_string(),
            status: Status::Unstable,
            ..Self::edit_of(schema)
        }
    }

    pub fn edit_of(schema: &Schema) -> Self {
        Self {
            kind: DraftKind::Edit,
            name: schema.name.clone(),
            version: schema.version.to_string(),
            definition: pretty(&schema.definition),
            owner: schema.owner.clone().unwrap_or_default(),
            status: schema.status,
            base: Some(DraftBase {
                version: schema.version,
                bump: schema.bump,
            }),
        }
    }

    pub fn submit(&self, member: &str) -> Result<Submission<Schema>, PvrError> {
        require("name", &self.name)?;
        require("member", member)?;
        let version = parse_draft_version(&self.version)?;
        let definition: Value = serde_json::from_str(&self.definition).map_err(|err| {
            draft_error(
                "pvr_registry.draft_definition",
                format!("definition is not valid JSON: {err}"),
            )
            .with_context("field", "definition")
        })?;

        let record = Schema {
            version,
            bump: DraftBase::bump_for(self.base.as_ref(), self.kind, &version),
            status: self.status,
            member: member.to_string(),
            owner: owner_from(&self.owner),
            name: self.name.trim().to_string(),
            definition,
        };
        let notice = match self.kind {
            DraftKind::Create => Notice::new(
                "New schema created successfully",
                "The schema has been created with unstable status.",
            ),
            DraftKind::NewVersion => Notice::new(
                "New schema version created successfully",
                format!("New version of {} schema has been created.", record.name),
            ),
            DraftKind::Edit => Notice::new(
                "Schema updated successfully",
                format!("Schema {} has been updated.", record.name),
            ),
        };
        tracing::debug!(kind = ?self.kind, version = %record.version, "schema draft submitted");
        Ok(Submission { record, notice })
    }
}

fn pretty(value: &Value) -> String {
    format!("{value:#}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_keeping_version_keeps_bump() {
        let base = DraftBase {
            version: Version::new(1, 2, 3),
            bump: Bump::Minor,
        };
        let same = Version::new(1, 2, 3);
        assert_eq!(
            DraftBase::bump_for(Some(&base), DraftKind::Edit, &same),
            Bump::Minor
        );
        assert_eq!(
            DraftBase::bump_for(Some(&base), DraftKind::Edit, &Version::new(2, 0, 0)),
            Bump::Major
        );
        assert_eq!(
            DraftBase::bump_for(Some(&base), DraftKind::NewVersion, &Version::new(1, 2, 4)),
            Bump::Patch
        );
        assert_eq!(DraftBase::bump_for(None, DraftKind::Create, &same), Bump::Major);
    }

    #[test]
    fn blank_owner_becomes_absent() {
        assert_eq!(owner_from("  "), None);
        assert_eq!(owner_from(" ana "), Some("ana".to_string()));
    }
}
