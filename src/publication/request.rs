//! Request construction for the publication endpoint
//!
//! Parameter names and encodings are a compatibility contract with the
//! server: booleans travel as the strings `"true"`/`"false"`, and optional
//! keys are left out entirely rather than sent empty.

use crate::error::Result;
use crate::types::{ItemRef, PublicationOptions};
use reqwest::Method;
use serde::Serialize;

/// Path of the publication endpoint
pub const PUBLICATION_PATH: &str = "/x_staticpub_publication";

/// Path of the export state endpoint
pub const EXPORT_STATE_PATH: &str = "/x_staticpub_publication/state";

/// Path of the ZIP download endpoint
pub const ZIP_PATH: &str = "/x_staticpub_zip";

/// Parameters that can be flattened into form/query pairs
pub trait QueryParameters {
    /// Ordered key/value pairs; array values become repeated keys
    fn to_pairs(&self) -> Vec<(&'static str, String)>;
}

/// An HTTP request, ready to be sent by a [`super::PublicationService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor<P = PublicationParameters> {
    /// `GET` for reads, `POST` for publication
    pub method: Method,
    /// Endpoint path, relative to the CMS root
    pub path: &'static str,
    /// Request parameters
    pub parameters: P,
}

/// Parameters of a preview or publish request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationParameters {
    /// Active admin UI language
    pub lang: String,
    /// Destination id
    pub destination: u64,
    /// `"true"` or `"false"`
    pub pending_only: &'static str,
    /// `"true"` or `"false"`
    pub include_descendants: &'static str,
    /// `"true"` or `"false"`
    pub include_neutral_language: &'static str,
    /// Language mode, unchanged
    pub language_mode: String,
    /// Selected item ids, only for non-empty selections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Vec<u64>>,
    /// Language subset, only for restricted language modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_subset: Option<Vec<String>>,
}

impl QueryParameters for PublicationParameters {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lang", self.lang.clone()),
            ("destination", self.destination.to_string()),
            ("pending_only", self.pending_only.to_string()),
            ("include_descendants", self.include_descendants.to_string()),
            (
                "include_neutral_language",
                self.include_neutral_language.to_string(),
            ),
            ("language_mode", self.language_mode.clone()),
        ];

        if let Some(selection) = &self.selection {
            pairs.extend(selection.iter().map(|id| ("selection", id.to_string())));
        }

        if let Some(subset) = &self.language_subset {
            pairs.extend(subset.iter().map(|lang| ("language_subset", lang.clone())));
        }

        pairs
    }
}

/// Parameters of an export state request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportStateParameters {
    /// Export job id
    pub export_id: u64,
    /// Active admin UI language
    pub lang: String,
}

impl QueryParameters for ExportStateParameters {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("export_id", self.export_id.to_string()),
            ("lang", self.lang.clone()),
        ]
    }
}

const fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Build a publication request
///
/// Fails only when the destination or a selection element carries no
/// numeric identifier.
pub fn build(
    method: Method,
    options: &PublicationOptions,
    current_language: &str,
) -> Result<RequestDescriptor> {
    let selection = match options.selection.as_deref() {
        Some(items) if !items.is_empty() => {
            Some(items.iter().map(ItemRef::id).collect::<Result<Vec<_>>>()?)
        }
        _ => None,
    };

    let language_subset = options
        .language_mode
        .is_restricted()
        .then(|| options.language_subset.clone());

    Ok(RequestDescriptor {
        method,
        path: PUBLICATION_PATH,
        parameters: PublicationParameters {
            lang: current_language.to_string(),
            destination: options.destination.id()?,
            pending_only: bool_param(options.pending_only),
            include_descendants: bool_param(options.include_descendants),
            include_neutral_language: bool_param(options.include_neutral_language),
            language_mode: options.language_mode.as_str().to_string(),
            selection,
            language_subset,
        },
    })
}

/// Build a non-mutating preview request
pub fn preview_request(
    options: &PublicationOptions,
    current_language: &str,
) -> Result<RequestDescriptor> {
    build(Method::GET, options, current_language)
}

/// Build a publication request, which starts an export on the server
pub fn publish_request(
    options: &PublicationOptions,
    current_language: &str,
) -> Result<RequestDescriptor> {
    build(Method::POST, options, current_language)
}

/// Build a request for the state of an export
pub fn export_state_request(
    export_id: u64,
    current_language: &str,
) -> RequestDescriptor<ExportStateParameters> {
    RequestDescriptor {
        method: Method::GET,
        path: EXPORT_STATE_PATH,
        parameters: ExportStateParameters {
            export_id,
            lang: current_language.to_string(),
        },
    }
}
