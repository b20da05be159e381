//! Mock publication service for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use staticpub_admin::config::ClientConfig;
use staticpub_admin::error::{Error, Result};
use staticpub_admin::publication::PublicationService;
use staticpub_admin::types::{
    ExportState, ExportStateResponse, PreviewResponse, PublicationOptions, PublishResponse,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simple mock publication service
///
/// Features:
/// - Auto-incrementing export ids
/// - Call tracking for verification
/// - Configurable preview response
/// - Error injection for failure path testing
pub struct MockPublicationService {
    config: ClientConfig,
    next_export_id: AtomicU64,
    preview_response: Mutex<PreviewResponse>,
    // Call tracking
    preview_calls: Mutex<Vec<PublicationOptions>>,
    publish_calls: Mutex<Vec<PublicationOptions>>,
    state_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_publish: Mutex<Option<(u16, String)>>,
}

impl MockPublicationService {
    /// Create a mock whose first export gets id `first_export_id`
    pub fn new(first_export_id: u64) -> Self {
        Self {
            config: ClientConfig::new("http://cms.test").unwrap(),
            next_export_id: AtomicU64::new(first_export_id),
            preview_response: Mutex::new(PreviewResponse {
                summary: String::new(),
                tasks: Vec::new(),
            }),
            preview_calls: Mutex::new(Vec::new()),
            publish_calls: Mutex::new(Vec::new()),
            state_calls: Mutex::new(Vec::new()),
            error_on_publish: Mutex::new(None),
        }
    }

    /// Make `publish` fail with the given status
    pub fn fail_publish(&self, status: u16, body: &str) {
        *self.error_on_publish.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Set the response for `preview`
    pub fn set_preview_response(&self, response: PreviewResponse) {
        *self.preview_response.lock().unwrap() = response;
    }

    /// Get all options `preview` was called with
    pub fn get_preview_calls(&self) -> Vec<PublicationOptions> {
        self.preview_calls.lock().unwrap().clone()
    }

    /// Get all options `publish` was called with
    pub fn get_publish_calls(&self) -> Vec<PublicationOptions> {
        self.publish_calls.lock().unwrap().clone()
    }

    /// Get all export ids `export_state` was called with
    pub fn get_state_calls(&self) -> Vec<u64> {
        self.state_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublicationService for MockPublicationService {
    async fn preview(&self, options: &PublicationOptions) -> Result<PreviewResponse> {
        self.preview_calls.lock().unwrap().push(options.clone());
        Ok(self.preview_response.lock().unwrap().clone())
    }

    async fn publish(&self, options: &PublicationOptions) -> Result<PublishResponse> {
        self.publish_calls.lock().unwrap().push(options.clone());

        if let Some((status, body)) = self.error_on_publish.lock().unwrap().as_ref() {
            return Err(Error::Status {
                status: *status,
                body: body.clone(),
            });
        }

        let export_id = self.next_export_id.fetch_add(1, Ordering::SeqCst);
        Ok(PublishResponse { export_id })
    }

    async fn export_state(&self, export_id: u64) -> Result<ExportStateResponse> {
        self.state_calls.lock().unwrap().push(export_id);
        Ok(ExportStateResponse {
            state: ExportState::Completed,
            tasks: Vec::new(),
        })
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
