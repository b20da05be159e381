//! Terminal implementation of the admin host collaborators

use crate::cli::style::check;
use anstream::println;
use staticpub_admin::error::Error;
use staticpub_admin::host::{AdminHost, NavigationPath, Notifier, TranslationBundle};
use std::sync::Arc;
use tracing::debug;

/// Notifier for terminal sessions; errors are left to the command result
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        println!("{} {message}", check());
    }

    // The command's error return is what gets printed
    fn notify_error(&self, error: &Error) {
        debug!("operation failed: {error}");
    }
}

/// Host collaborators for a terminal session, navigation starting at `start`
pub fn terminal_host(start: &[&str]) -> (AdminHost, Arc<NavigationPath>) {
    let navigation = Arc::new(NavigationPath::new(start.iter().copied()));
    let host = AdminHost {
        navigation: navigation.clone(),
        notifier: Arc::new(TerminalNotifier),
        translations: Arc::new(TranslationBundle::english()),
    };
    (host, navigation)
}
