//! Admin registry and extension installation
//!
//! The host's toolbars, action sets and navigation entries live in an
//! explicit [`AdminRegistry`]. [`install`] adds the static publication
//! pieces in a fixed order.

use crate::actions::{
    ActionEntry, ActionSet, BEGIN_PUBLICATION_ID, BeginPublicationAction, CANCEL_ID, CancelAction,
    PUBLICATION_STEP, PublishAction,
};
use crate::error::{Error, Result};
use crate::nodes::{NodeFactory, PublicationNode};
use crate::publication::PublicationService;
use std::sync::Arc;
use tracing::debug;

/// Id of the toolbar shown on content listings
pub const LISTING_TOOLBAR: &str = "listing-toolbar";

/// Id of the toolbar shown on edit forms
pub const EDIT_TOOLBAR: &str = "edit-toolbar";

/// Main group of a toolbar
pub const MAIN_ENTRY: &str = "main";

/// Id of the publication view toolbar
pub const PUBLICATION_TOOLBAR: &str = "x-staticpub-publication-toolbar";

/// Toolbars, action sets and navigation entries of the admin
#[derive(Debug, Clone)]
pub struct AdminRegistry {
    /// Toolbar of content listings
    pub listing_toolbar: ActionSet,
    /// Toolbar of edit forms
    pub edit_toolbar: ActionSet,
    action_sets: Vec<ActionSet>,
    global_entries: Vec<(String, NodeFactory)>,
}

impl Default for AdminRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminRegistry {
    /// Registry with the host's standard toolbars, each with a `main` group
    pub fn new() -> Self {
        Self {
            listing_toolbar: toolbar(LISTING_TOOLBAR),
            edit_toolbar: toolbar(EDIT_TOOLBAR),
            action_sets: Vec::new(),
            global_entries: Vec::new(),
        }
    }

    /// Register a standalone action set
    pub fn register_action_set(&mut self, set: ActionSet) -> Result<()> {
        if self.action_set(set.id()).is_some() {
            return Err(Error::DuplicateRegistration(format!(
                "action set {}",
                set.id()
            )));
        }
        debug!("registering action set {}", set.id());
        self.action_sets.push(set);
        Ok(())
    }

    /// Standalone action set by id
    pub fn action_set(&self, id: &str) -> Option<&ActionSet> {
        self.action_sets.iter().find(|s| s.id() == id)
    }

    /// Standalone action set ids, in registration order
    pub fn action_set_ids(&self) -> Vec<&str> {
        self.action_sets.iter().map(ActionSet::id).collect()
    }

    /// Register a node for a global navigation step
    pub fn register_node(&mut self, step: &str, factory: NodeFactory) -> Result<()> {
        if self.node(step).is_some() {
            return Err(Error::DuplicateRegistration(format!("navigation entry {step}")));
        }
        debug!("registering navigation entry {step}");
        self.global_entries.push((step.to_string(), factory));
        Ok(())
    }

    /// Node factory for a global navigation step
    pub fn node(&self, step: &str) -> Option<NodeFactory> {
        self.global_entries
            .iter()
            .find(|(name, _)| name == step)
            .map(|(_, factory)| *factory)
    }

    /// Global navigation steps, in registration order
    pub fn node_steps(&self) -> Vec<&str> {
        self.global_entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}

fn toolbar(id: &str) -> ActionSet {
    ActionSet::with_group(id, MAIN_ENTRY)
}

fn main_entry(toolbar: &mut ActionSet) -> Result<&mut ActionSet> {
    let id = toolbar.id().to_string();
    toolbar
        .get_entry_mut(MAIN_ENTRY)
        .ok_or_else(|| Error::Config(format!("toolbar {id} has no {MAIN_ENTRY} entry")))
}

/// Install the static publication actions and navigation node
///
/// Order:
/// 1. publish action in the listing toolbar
/// 2. publish action in the edit toolbar
/// 3. publication toolbar (begin publication, cancel)
/// 4. publication node for the `x-staticpub-publish` step
///
/// All or nothing: on error the registry is left as it was.
pub fn install(registry: &mut AdminRegistry, service: Arc<dyn PublicationService>) -> Result<()> {
    let mut staged = registry.clone();

    main_entry(&mut staged.listing_toolbar)?
        .add_action(Arc::new(PublishAction::new(PUBLICATION_STEP)))?;

    main_entry(&mut staged.edit_toolbar)?
        .add_action(Arc::new(PublishAction::new(PUBLICATION_STEP)))?;

    staged.register_action_set(ActionSet::with_entries(
        PUBLICATION_TOOLBAR,
        vec![
            ActionEntry::Action(Arc::new(BeginPublicationAction::new(
                BEGIN_PUBLICATION_ID,
                service,
            ))),
            ActionEntry::Action(Arc::new(CancelAction::new(CANCEL_ID))),
        ],
    )?)?;

    staged.register_node(PUBLICATION_STEP, PublicationNode::create)?;

    *registry = staged;
    Ok(())
}
