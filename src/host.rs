//! Collaborators provided by the hosting admin application
//!
//! Actions and nodes only consume these interfaces. The admin frontend (or
//! the `staticpub` binary) supplies the implementations.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Translation key of the generic success notice
pub const SUCCESS_NOTICE_KEY: &str = "woost.admin.notices.success";

/// A relative navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Go to the parent of the current location
    Up,
    /// Descend into a named child
    Segment(String),
}

impl PathStep {
    /// Named step
    pub fn segment(name: impl Into<String>) -> Self {
        Self::Segment(name.into())
    }
}

/// Admin navigation path
pub trait Navigation: Send + Sync {
    /// Apply relative steps to the current path
    fn extend_path(&self, steps: &[PathStep]);

    /// Current path segments, root first
    fn current_path(&self) -> Vec<String>;
}

/// In-memory navigation path
#[derive(Debug, Default)]
pub struct NavigationPath {
    segments: Mutex<Vec<String>>,
}

impl NavigationPath {
    /// Start at the given path
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: Mutex::new(segments.into_iter().map(Into::into).collect()),
        }
    }
}

impl Navigation for NavigationPath {
    fn extend_path(&self, steps: &[PathStep]) {
        let mut segments = self
            .segments
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for step in steps {
            match step {
                PathStep::Up => {
                    segments.pop();
                }
                PathStep::Segment(name) => segments.push(name.clone()),
            }
        }
    }

    fn current_path(&self) -> Vec<String> {
        self.segments
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

/// User-facing notifications
pub trait Notifier: Send + Sync {
    /// Report a completed operation
    fn notify_success(&self, message: &str);

    /// Report a failed operation
    fn notify_error(&self, error: &Error);
}

/// Translation lookup by key
pub trait Translations: Send + Sync {
    /// Translated text for a key, if known
    fn get(&self, key: &str) -> Option<String>;

    /// Translated text for a key, falling back to the key itself
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or_else(|| key.to_string())
    }
}

/// Static translation table
#[derive(Debug, Clone, Default)]
pub struct TranslationBundle {
    entries: HashMap<String, String>,
}

impl TranslationBundle {
    /// Add or replace an entry
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// English texts for the static publication admin
    pub fn english() -> Self {
        Self::default()
            .with(
                "woost.extensions.staticpub.admin.nodes.PublicationNode.title",
                "Publish",
            )
            .with(
                "woost.extensions.staticpub.admin.actions.x-staticpub-publish",
                "Publish",
            )
            .with(
                "woost.extensions.staticpub.admin.actions.x-staticpub-begin-publication",
                "Start publication",
            )
            .with("woost.admin.actions.cancel", "Cancel")
            .with(SUCCESS_NOTICE_KEY, "Operation completed")
    }
}

impl Translations for TranslationBundle {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Options for [`AdminHost::attempt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptOptions {
    /// Show the generic success notice when the operation succeeds
    pub success_notice: bool,
}

impl Default for AttemptOptions {
    fn default() -> Self {
        Self {
            success_notice: true,
        }
    }
}

/// Bundle of host collaborators handed to actions
#[derive(Clone)]
pub struct AdminHost {
    /// Navigation path
    pub navigation: Arc<dyn Navigation>,
    /// Notification sink
    pub notifier: Arc<dyn Notifier>,
    /// Translation lookup
    pub translations: Arc<dyn Translations>,
}

impl AdminHost {
    /// Run an operation, reporting its outcome through the notifier
    ///
    /// Errors are reported and then returned unchanged; nothing is retried.
    pub async fn attempt<T, F>(&self, operation: F, options: AttemptOptions) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
    {
        match operation.await {
            Ok(value) => {
                if options.success_notice {
                    self.notifier
                        .notify_success(&self.translations.translate(SUCCESS_NOTICE_KEY));
                }
                Ok(value)
            }
            Err(e) => {
                self.notifier.notify_error(&e);
                Err(e)
            }
        }
    }
}
