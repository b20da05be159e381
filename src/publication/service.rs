//! Publication service over HTTP

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::publication::request::{
    QueryParameters, RequestDescriptor, ZIP_PATH, export_state_request, preview_request,
    publish_request,
};
use crate::types::{ExportStateResponse, PreviewResponse, PublicationOptions, PublishResponse};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Publication operations against a CMS
///
/// Every call is independent: nothing is retried and concurrent calls are
/// not deduplicated. Retry and presentation belong to the caller.
#[async_trait]
pub trait PublicationService: Send + Sync {
    /// Describe what a publication with these options would do
    async fn preview(&self, options: &PublicationOptions) -> Result<PreviewResponse>;

    /// Start a publication and return the id of the created export
    async fn publish(&self, options: &PublicationOptions) -> Result<PublishResponse>;

    /// Get the state of an export
    async fn export_state(&self, export_id: u64) -> Result<ExportStateResponse>;

    /// Get the client configuration
    fn config(&self) -> &ClientConfig;

    /// Download URL of an export written to a ZIP destination
    fn zip_url(&self, export_id: u64) -> Result<Url> {
        let mut url = self.config().endpoint(ZIP_PATH)?;
        url.query_pairs_mut()
            .append_pair("export_id", &export_id.to_string());
        Ok(url)
    }
}

/// Publication service using reqwest
pub struct HttpPublicationService {
    client: Client,
    config: ClientConfig,
}

impl HttpPublicationService {
    /// Create a new service
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Send a request and decode its JSON body
    pub async fn send<P, T>(&self, request: &RequestDescriptor<P>) -> Result<T>
    where
        P: QueryParameters + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(request.path)?;
        let pairs = request.parameters.to_pairs();

        debug!("{} {} ({} parameters)", request.method, url, pairs.len());

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some(session) = &self.config.session {
            builder = builder.header(COOKIE, session);
        }

        builder = if request.method == Method::GET {
            builder.query(&pairs)
        } else {
            builder.form(&pairs)
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("publication endpoint answered {status}");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PublicationService for HttpPublicationService {
    async fn preview(&self, options: &PublicationOptions) -> Result<PreviewResponse> {
        let request = preview_request(options, &self.config.language)?;
        self.send(&request).await
    }

    async fn publish(&self, options: &PublicationOptions) -> Result<PublishResponse> {
        let request = publish_request(options, &self.config.language)?;
        let response: PublishResponse = self.send(&request).await?;
        debug!("export {} started", response.export_id);
        Ok(response)
    }

    async fn export_state(&self, export_id: u64) -> Result<ExportStateResponse> {
        let request = export_state_request(export_id, &self.config.language);
        self.send(&request).await
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}
