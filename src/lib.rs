//! staticpub-admin - publish CMS content to static sites
//!
//! Client side of the static publication extension: builds and sends
//! preview/publish requests to the publication endpoint, and exposes the
//! admin actions and navigation node that drive them.

pub mod actions;
pub mod config;
pub mod error;
pub mod host;
pub mod nodes;
pub mod publication;
pub mod registry;
pub mod types;
