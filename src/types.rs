//! Core types for staticpub-admin

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Reference to a CMS item: either a bare id or an object carrying one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    /// Bare numeric identifier
    Id(u64),
    /// Exported object; its `id` field is the identifier
    Object(Map<String, Value>),
}

impl ItemRef {
    /// Build an object reference from an id and a display label
    pub fn object(id: u64, label: &str) -> Self {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::from(id));
        map.insert("_label".to_string(), Value::from(label));
        Self::Object(map)
    }

    /// Resolve to the bare numeric identifier
    pub fn id(&self) -> Result<u64> {
        match self {
            Self::Id(id) => Ok(*id),
            Self::Object(map) => map.get("id").and_then(Value::as_u64).ok_or_else(|| {
                Error::MalformedItem(format!(
                    "expected a numeric `id` field in {}",
                    Value::Object(map.clone())
                ))
            }),
        }
    }

    /// Human readable label, if the object carries one
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Object(map) => map.get("_label").and_then(Value::as_str),
        }
    }
}

impl From<u64> for ItemRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

/// Which language variants of the content are published
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageMode {
    /// Every language
    #[default]
    All,
    /// Only the languages in the subset
    Include,
    /// Every language except those in the subset
    Exclude,
    /// Any other mode string, passed to the endpoint as is
    Other(String),
}

impl LanguageMode {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Include => "include",
            Self::Exclude => "exclude",
            Self::Other(mode) => mode,
        }
    }

    /// Whether this mode restricts the language set
    pub fn is_restricted(&self) -> bool {
        *self != Self::All
    }
}

impl From<&str> for LanguageMode {
    fn from(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "include" => Self::Include,
            "exclude" => Self::Exclude,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LanguageMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<LanguageMode> for String {
    fn from(mode: LanguageMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_true() -> bool {
    true
}

/// Options for a preview or publish call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationOptions {
    /// Destination to publish to; only its id is sent
    pub destination: ItemRef,
    /// Restrict to items with pending changes
    #[serde(default)]
    pub pending_only: bool,
    /// Expand the selection to descendant documents
    #[serde(default)]
    pub include_descendants: bool,
    /// Include language-neutral content (files and the like)
    #[serde(default = "default_true")]
    pub include_neutral_language: bool,
    /// Language policy
    #[serde(default)]
    pub language_mode: LanguageMode,
    /// Explicit items to publish; empty or absent means the site default
    #[serde(default)]
    pub selection: Option<Vec<ItemRef>>,
    /// Languages for `include`/`exclude` modes
    #[serde(default)]
    pub language_subset: Vec<String>,
}

impl PublicationOptions {
    /// Options for a full publication to the given destination
    pub fn new(destination: impl Into<ItemRef>) -> Self {
        Self {
            destination: destination.into(),
            pending_only: false,
            include_descendants: false,
            include_neutral_language: true,
            language_mode: LanguageMode::All,
            selection: None,
            language_subset: Vec::new(),
        }
    }
}

/// Descriptor of an admin content model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Model name
    pub name: String,
    /// Declared capability of the underlying member: can be published
    pub is_publishable: bool,
}

/// A single item/language entry of a preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTask {
    /// Export action (`post` or `delete`)
    pub action: TaskAction,
    /// Task status, `pending` for previews
    pub status: String,
    /// URL of the page on the CMS
    pub source_url: String,
    /// URL the page will have on the destination
    #[serde(default)]
    pub export_url: Option<String>,
}

/// All tasks for one publishable item in a preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRecord {
    /// Exported item reference
    pub publishable: ItemRef,
    /// Ancestors of the item, root first
    #[serde(default)]
    pub parents: Vec<ItemRef>,
    /// Tasks by language; the empty key is the neutral language
    #[serde(default)]
    pub languages: BTreeMap<String, PreviewTask>,
    /// Translated language count
    #[serde(default)]
    pub language_count: String,
}

/// Response to a preview request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Translated summary line
    #[serde(default)]
    pub summary: String,
    /// One record per publishable item
    #[serde(default)]
    pub tasks: Vec<PreviewRecord>,
}

impl PreviewResponse {
    /// Total number of item/language tasks
    pub fn task_count(&self) -> usize {
        self.tasks.iter().map(|r| r.languages.len()).sum()
    }
}

/// Response to a publish request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    /// Identifier of the export job created on the server
    pub export_id: u64,
}

/// Lifecycle of an export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportState {
    /// Created, not started
    Idle,
    /// Running in the background
    Running,
    /// Finished, possibly with failed tasks
    Completed,
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// What an export task does to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    /// Upload the rendered page
    Post,
    /// Remove the page
    Delete,
}

/// Outcome of a single export task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Not processed yet
    Pending,
    /// Processed with an error
    Failed,
    /// Processed successfully
    Success,
}

/// A task of a running or finished export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTask {
    /// Exported item
    pub item: ItemRef,
    /// Language, absent for neutral content
    #[serde(default)]
    pub language: Option<String>,
    /// Task action
    pub action: TaskAction,
    /// Task state
    pub state: TaskState,
    /// Error message for failed tasks
    #[serde(default)]
    pub error_message: Option<String>,
    /// URL of the page on the CMS
    #[serde(default)]
    pub source_url: Option<String>,
    /// URL of the page on the destination
    #[serde(default)]
    pub export_url: Option<String>,
}

/// Response to an export state request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportStateResponse {
    /// Export lifecycle state
    pub state: ExportState,
    /// Export tasks
    #[serde(default)]
    pub tasks: Vec<ExportTask>,
}

impl ExportStateResponse {
    /// Number of tasks in the given state
    pub fn count(&self, state: TaskState) -> usize {
        self.tasks.iter().filter(|t| t.state == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_ref_resolves_bare_id() {
        assert_eq!(ItemRef::Id(7).id().unwrap(), 7);
    }

    #[test]
    fn test_item_ref_resolves_object_id() {
        let item: ItemRef = serde_json::from_value(json!({"id": 9, "_class": "Document"})).unwrap();
        assert_eq!(item.id().unwrap(), 9);
    }

    #[test]
    fn test_item_ref_without_id_is_malformed() {
        let item: ItemRef = serde_json::from_value(json!({"title": "Home"})).unwrap();
        let err = item.id().unwrap_err();
        assert!(matches!(err, Error::MalformedItem(_)));
        assert!(err.to_string().contains("Home"));
    }

    #[test]
    fn test_item_ref_with_string_id_is_malformed() {
        let item: ItemRef = serde_json::from_value(json!({"id": "9"})).unwrap();
        assert!(item.id().is_err());
    }

    #[test]
    fn test_language_mode_passthrough() {
        assert_eq!(LanguageMode::from("include"), LanguageMode::Include);
        assert_eq!(LanguageMode::from("custom").as_str(), "custom");
        assert!(!LanguageMode::All.is_restricted());
        assert!(LanguageMode::Other("custom".into()).is_restricted());
    }

    #[test]
    fn test_options_defaults_from_json() {
        let options: PublicationOptions = serde_json::from_value(json!({"destination": 3})).unwrap();
        assert_eq!(options, PublicationOptions::new(3_u64));
        assert!(options.include_neutral_language);
    }

    #[test]
    fn test_options_with_mixed_selection() {
        let options: PublicationOptions = serde_json::from_value(json!({
            "destination": {"id": 42},
            "language_mode": "exclude",
            "language_subset": ["de"],
            "selection": [7, {"id": 9}]
        }))
        .unwrap();
        assert_eq!(options.language_mode, LanguageMode::Exclude);
        let ids: Vec<u64> = options
            .selection
            .unwrap()
            .iter()
            .map(|i| i.id().unwrap())
            .collect();
        assert_eq!(ids, vec![7, 9]);
    }

    #[test]
    fn test_export_state_counts() {
        let response: ExportStateResponse = serde_json::from_value(json!({
            "state": "running",
            "tasks": [
                {"item": {"id": 1}, "language": "en", "action": "post", "state": "success"},
                {"item": {"id": 1}, "language": null, "action": "post", "state": "pending"},
                {"item": {"id": 2}, "language": "ca", "action": "delete", "state": "failed",
                 "error_message": "timeout"}
            ]
        }))
        .unwrap();
        assert_eq!(response.state, ExportState::Running);
        assert_eq!(response.count(TaskState::Success), 1);
        assert_eq!(response.count(TaskState::Pending), 1);
        assert_eq!(response.count(TaskState::Failed), 1);
    }
}
