//! Publication endpoint client
//!
//! Builds request descriptors for previews, publications and export state
//! queries, and sends them through a [`PublicationService`].

mod request;
mod service;

pub use request::{
    EXPORT_STATE_PATH, ExportStateParameters, PUBLICATION_PATH, PublicationParameters,
    QueryParameters, RequestDescriptor, ZIP_PATH, build, export_state_request, preview_request,
    publish_request,
};
pub use service::{HttpPublicationService, PublicationService};
