//! Test data factories for staticpub-admin types
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use serde_json::{Value, json};
use staticpub_admin::types::{ItemRef, LanguageMode, PublicationOptions};

/// Options matching the documented example request
pub fn example_options() -> PublicationOptions {
    PublicationOptions {
        destination: ItemRef::object(42, "Production"),
        pending_only: true,
        include_descendants: false,
        include_neutral_language: false,
        language_mode: LanguageMode::All,
        selection: Some(vec![ItemRef::Id(7), ItemRef::object(9, "News")]),
        language_subset: Vec::new(),
    }
}

/// Same as [`example_options`], restricted to a language subset
pub fn example_options_with_subset(mode: &str, subset: &[&str]) -> PublicationOptions {
    PublicationOptions {
        language_mode: LanguageMode::from(mode),
        language_subset: subset.iter().map(ToString::to_string).collect(),
        ..example_options()
    }
}

/// Preview body as the endpoint returns it
pub fn preview_body() -> Value {
    json!({
        "summary": "3 tasks will be published",
        "tasks": [
            {
                "publishable": {"id": 7, "_class": "Document", "_label": "Home"},
                "parents": [],
                "languages": {
                    "en": {
                        "action": "post",
                        "status": "pending",
                        "source_url": "http://cms.test/en/",
                        "export_url": "https://www.example.com/en/"
                    },
                    "ca": {
                        "action": "post",
                        "status": "pending",
                        "source_url": "http://cms.test/ca/",
                        "export_url": "https://www.example.com/ca/"
                    }
                },
                "language_count": "2 languages"
            },
            {
                "publishable": {"id": 9, "_class": "File", "_label": "logo.svg"},
                "parents": [{"id": 7, "_label": "Home"}],
                "languages": {
                    "": {
                        "action": "post",
                        "status": "pending",
                        "source_url": "http://cms.test/images/logo.svg",
                        "export_url": null
                    }
                },
                "language_count": "1 language"
            }
        ]
    })
}

/// Export state body as the endpoint returns it
pub fn export_state_body(state: &str) -> Value {
    json!({
        "state": state,
        "tasks": [
            {
                "item": {"id": 7, "_label": "Home"},
                "language": "en",
                "action": "post",
                "state": "success",
                "source_url": "http://cms.test/en/",
                "export_url": "https://www.example.com/en/"
            },
            {
                "item": {"id": 9, "_label": "logo.svg"},
                "language": null,
                "action": "post",
                "state": "failed",
                "error_message": "upload rejected"
            }
        ]
    })
}
