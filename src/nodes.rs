//! Navigation nodes for static publication
//!
//! A node is what the admin shows when the navigation path reaches a
//! registered step. The publication node works on whatever is selected in
//! the view it was opened from.

use crate::host::Translations;
use crate::types::{ItemRef, PublicationOptions};

/// Translation key of the publication node title
pub const PUBLICATION_NODE_TITLE: &str = "woost.extensions.staticpub.admin.nodes.PublicationNode.title";

/// Name of the view component rendering the publication node
pub const PUBLICATION_VIEW: &str = "PublicationView";

/// A widget with selectable values
#[derive(Debug, Clone, Default)]
pub struct Selectable {
    /// Currently selected values, in display order
    pub selected_values: Vec<ItemRef>,
}

/// A node of the navigation stack that may expose a selectable widget
#[derive(Debug, Clone, Default)]
pub struct StackNode {
    /// The selectable widget, if the view has one
    pub selectable: Option<Selectable>,
}

/// The node a navigation node was opened from
#[derive(Debug, Clone, Default)]
pub struct ParentNode {
    /// Stack node of the parent view, if it has been rendered
    pub stack_node: Option<StackNode>,
}

impl ParentNode {
    /// Parent whose view has the given values selected
    pub fn with_selection(selected_values: Vec<ItemRef>) -> Self {
        Self {
            stack_node: Some(StackNode {
                selectable: Some(Selectable { selected_values }),
            }),
        }
    }
}

/// A node of the admin navigation tree
pub trait NavigationNode: Send + Sync {
    /// Translated title
    fn title(&self, translations: &dyn Translations) -> String;

    /// View component rendering the node
    fn component(&self) -> &str;
}

/// Constructor stored in the node registry
pub type NodeFactory = fn(ParentNode) -> Box<dyn NavigationNode>;

/// The "publish" wizard step
#[derive(Debug, Clone, Default)]
pub struct PublicationNode {
    parent: ParentNode,
}

impl PublicationNode {
    /// Create a node opened from `parent`
    pub const fn new(parent: ParentNode) -> Self {
        Self { parent }
    }

    /// Factory for the node registry
    pub fn create(parent: ParentNode) -> Box<dyn NavigationNode> {
        Box::new(Self::new(parent))
    }

    /// Items to publish
    ///
    /// The parent view's non-empty selection, or nothing, which lets the
    /// server fall back to its default content set.
    pub fn selection(&self) -> Vec<ItemRef> {
        self.parent
            .stack_node
            .as_ref()
            .and_then(|node| node.selectable.as_ref())
            .filter(|selectable| !selectable.selected_values.is_empty())
            .map(|selectable| selectable.selected_values.clone())
            .unwrap_or_default()
    }

    /// Initial publication options for this node
    pub fn options(&self, destination: ItemRef) -> PublicationOptions {
        let selection = self.selection();
        PublicationOptions {
            selection: (!selection.is_empty()).then_some(selection),
            ..PublicationOptions::new(destination)
        }
    }
}

impl NavigationNode for PublicationNode {
    fn title(&self, translations: &dyn Translations) -> String {
        translations.translate(PUBLICATION_NODE_TITLE)
    }

    fn component(&self) -> &str {
        PUBLICATION_VIEW
    }
}
