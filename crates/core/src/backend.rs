//! Seam between the controller and the prediction service.
//!
//! The controller only ever talks to the service through [`SymptomBackend`]. The production
//! implementation lives in `symptom-api-client`; tests plug in in-memory implementations.

use crate::error::BackendResult;
use api_shared::{DiseasesRes, PredictReq, PredictRes};

#[async_trait::async_trait]
pub trait SymptomBackend: Send + Sync {
    /// Fetch the disease catalogue (`GET /diseases`).
    async fn fetch_diseases(&self) -> BackendResult<DiseasesRes>;

    /// Ask for disease matches for the given symptoms (`POST /predict`).
    async fn predict(&self, req: &PredictReq) -> BackendResult<PredictRes>;
}

