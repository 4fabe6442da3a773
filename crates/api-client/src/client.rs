//! reqwest implementation of [`SymptomBackend`].

use api_shared::{endpoint_url, DiseasesRes, PredictReq, PredictRes, DISEASES_PATH, PREDICT_PATH};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use symptom_core::{BackendError, BackendResult, ClientConfig, SymptomBackend};
use tracing::debug;

/// Talks to the prediction service over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a client for the configured base URL.
    ///
    /// Requests have no timeout unless one is configured.
    pub fn new(config: &ClientConfig) -> BackendResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport)?;

        Ok(Self {
            client,
            base_url: config.api_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

fn transport(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}

/// Rejects non-2xx responses and decodes the body of the rest.
async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl SymptomBackend for HttpBackend {
    async fn fetch_diseases(&self) -> BackendResult<DiseasesRes> {
        let url = self.url(DISEASES_PATH);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn predict(&self, req: &PredictReq) -> BackendResult<PredictRes> {
        let url = self.url(PREDICT_PATH);
        debug!("POST {url} ({} symptoms)", req.symptoms.len());
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(req)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
