//! Admin actions for static publication
//!
//! Each action is a small struct implementing [`Action`]. Actions are
//! grouped into [`ActionSet`]s (toolbars) held by the admin registry.

use crate::error::{Error, Result};
use crate::host::{AdminHost, AttemptOptions, PathStep, Translations};
use crate::publication::PublicationService;
use crate::types::{ModelDescriptor, PublicationOptions, PublishResponse};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Translation prefix of the static publication actions
pub const TRANSLATION_PREFIX: &str = "woost.extensions.staticpub.admin.actions";

/// Translation prefix of the host's stock actions
pub const HOST_TRANSLATION_PREFIX: &str = "woost.admin.actions";

/// Navigation step (and action id) of the publication wizard
pub const PUBLICATION_STEP: &str = "x-staticpub-publish";

/// Id of the begin-publication action
pub const BEGIN_PUBLICATION_ID: &str = "x-staticpub-begin-publication";

/// Id of the cancel action
pub const CANCEL_ID: &str = "cancel";

const PUBLISH_ICON: &str = "woost.extensions.staticpub.admin.ui://images/actions/publish.svg";
const ACCEPT_ICON: &str = "woost.admin.ui://images/actions/accept.svg";
const CANCEL_ICON: &str = "woost.admin.ui://images/actions/cancel.svg";

/// Presentation state of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    /// Not shown
    Hidden,
    /// Shown and enabled
    Visible,
    /// Shown but not clickable
    Disabled,
}

/// State of the view hosting an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Still loading its data
    #[default]
    Loading,
    /// Ready for interaction
    Ready,
    /// Failed to load
    Failed,
}

/// What an action sees of the UI it is invoked from
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Content model shown by the view, if any
    pub model: Option<ModelDescriptor>,
    /// State of the view
    pub state: ViewState,
    /// Options edited in the publication view
    pub publication_options: Option<PublicationOptions>,
}

/// An admin action
#[async_trait]
pub trait Action: Send + Sync {
    /// Action id, unique within its action set
    fn id(&self) -> &str;

    /// Prefix for the action's translation keys
    fn translation_prefix(&self) -> &str;

    /// Icon shown for the action
    fn icon_url(&self, ctx: &ActionContext) -> &str;

    /// Whether the action applies to a content model
    fn matches_model(&self, _model: &ModelDescriptor) -> bool {
        true
    }

    /// Presentation state in a context
    fn state(&self, ctx: &ActionContext) -> ActionState {
        model_state(self, ctx)
    }

    /// Translated label
    fn label(&self, translations: &dyn Translations) -> String {
        translations.translate(&format!("{}.{}", self.translation_prefix(), self.id()))
    }

    /// Run the action
    async fn invoke(&self, ctx: &ActionContext, host: &AdminHost) -> Result<()>;
}

/// State derived from the context model alone
pub fn model_state<A: Action + ?Sized>(action: &A, ctx: &ActionContext) -> ActionState {
    match &ctx.model {
        Some(model) if !action.matches_model(model) => ActionState::Hidden,
        _ => ActionState::Visible,
    }
}

/// Opens the publication wizard for the current content
pub struct PublishAction {
    id: String,
}

impl PublishAction {
    /// Create the action with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Action for PublishAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn translation_prefix(&self) -> &str {
        TRANSLATION_PREFIX
    }

    fn icon_url(&self, _ctx: &ActionContext) -> &str {
        PUBLISH_ICON
    }

    fn matches_model(&self, model: &ModelDescriptor) -> bool {
        model.is_publishable
    }

    async fn invoke(&self, _ctx: &ActionContext, host: &AdminHost) -> Result<()> {
        host.navigation
            .extend_path(&[PathStep::segment(PUBLICATION_STEP)]);
        Ok(())
    }
}

/// Starts the publication configured in the wizard
pub struct BeginPublicationAction {
    id: String,
    service: Arc<dyn PublicationService>,
}

impl BeginPublicationAction {
    /// Create the action with the given id
    pub fn new(id: impl Into<String>, service: Arc<dyn PublicationService>) -> Self {
        Self {
            id: id.into(),
            service,
        }
    }

    /// Publish with the context options and navigate to the new export
    ///
    /// The navigation is the success feedback, so no success notice is
    /// shown. Errors go through the host notifier and are returned.
    pub async fn begin(&self, ctx: &ActionContext, host: &AdminHost) -> Result<PublishResponse> {
        let operation = async {
            if self.state(ctx) != ActionState::Visible {
                return Err(Error::NotReady);
            }

            let options = ctx
                .publication_options
                .as_ref()
                .ok_or(Error::MissingOptions)?;

            let response = self.service.publish(options).await?;
            debug!("navigating to export {}", response.export_id);

            host.navigation.extend_path(&[
                PathStep::Up,
                PathStep::Segment(response.export_id.to_string()),
            ]);
            Ok::<_, Error>(response)
        };

        host.attempt(
            operation,
            AttemptOptions {
                success_notice: false,
            },
        )
        .await
    }
}

#[async_trait]
impl Action for BeginPublicationAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn translation_prefix(&self) -> &str {
        TRANSLATION_PREFIX
    }

    fn icon_url(&self, _ctx: &ActionContext) -> &str {
        ACCEPT_ICON
    }

    fn state(&self, ctx: &ActionContext) -> ActionState {
        let state = model_state(self, ctx);

        if state == ActionState::Visible && ctx.state != ViewState::Ready {
            ActionState::Disabled
        } else {
            state
        }
    }

    async fn invoke(&self, ctx: &ActionContext, host: &AdminHost) -> Result<()> {
        self.begin(ctx, host).await.map(|_| ())
    }
}

/// Leaves the current view
pub struct CancelAction {
    id: String,
}

impl CancelAction {
    /// Create the action with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Action for CancelAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn translation_prefix(&self) -> &str {
        HOST_TRANSLATION_PREFIX
    }

    fn icon_url(&self, _ctx: &ActionContext) -> &str {
        CANCEL_ICON
    }

    async fn invoke(&self, _ctx: &ActionContext, host: &AdminHost) -> Result<()> {
        host.navigation.extend_path(&[PathStep::Up]);
        Ok(())
    }
}

/// An entry of an action set
#[derive(Clone)]
pub enum ActionEntry {
    /// A single action
    Action(Arc<dyn Action>),
    /// A nested group of actions
    Set(ActionSet),
}

impl ActionEntry {
    /// Id of the action or set
    pub fn id(&self) -> &str {
        match self {
            Self::Action(action) => action.id(),
            Self::Set(set) => &set.id,
        }
    }
}

impl fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => f.debug_tuple("Action").field(&action.id()).finish(),
            Self::Set(set) => f.debug_tuple("Set").field(set).finish(),
        }
    }
}

/// Ordered, named group of actions
#[derive(Debug, Clone)]
pub struct ActionSet {
    id: String,
    entries: Vec<ActionEntry>,
}

impl ActionSet {
    /// Create an empty set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Create a set holding a single empty group
    pub fn with_group(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: vec![ActionEntry::Set(Self::new(group))],
        }
    }

    /// Create a set from entries, rejecting duplicate ids
    pub fn with_entries(id: impl Into<String>, entries: Vec<ActionEntry>) -> Result<Self> {
        let mut set = Self::new(id);
        for entry in entries {
            set.add(entry)?;
        }
        Ok(set)
    }

    /// Set id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// Append an entry; ids must be unique within the set
    pub fn add(&mut self, entry: ActionEntry) -> Result<()> {
        if self.entries.iter().any(|e| e.id() == entry.id()) {
            return Err(Error::DuplicateRegistration(format!(
                "{} in action set {}",
                entry.id(),
                self.id
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Append an action
    pub fn add_action(&mut self, action: Arc<dyn Action>) -> Result<()> {
        self.add(ActionEntry::Action(action))
    }

    /// Nested set by id
    pub fn get_entry(&self, id: &str) -> Option<&Self> {
        self.entries.iter().find_map(|e| match e {
            ActionEntry::Set(set) if set.id == id => Some(set),
            _ => None,
        })
    }

    /// Nested set by id, mutably
    pub fn get_entry_mut(&mut self, id: &str) -> Option<&mut Self> {
        self.entries.iter_mut().find_map(|e| match e {
            ActionEntry::Set(set) if set.id == id => Some(set),
            _ => None,
        })
    }

    /// All actions, depth first, in registration order
    pub fn actions(&self) -> Vec<Arc<dyn Action>> {
        let mut actions = Vec::new();
        for entry in &self.entries {
            match entry {
                ActionEntry::Action(action) => actions.push(Arc::clone(action)),
                ActionEntry::Set(set) => actions.extend(set.actions()),
            }
        }
        actions
    }

    /// Find an action anywhere in the set
    pub fn find_action(&self, id: &str) -> Option<Arc<dyn Action>> {
        self.actions().into_iter().find(|a| a.id() == id)
    }
}
