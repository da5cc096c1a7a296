//! Health check operations.

use super::CatalogClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Backend report from `/healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub storage: String,
    pub cache: String,
}

impl CatalogClient {
    /// Liveness probe. Succeeds when the server answers 200.
    pub async fn health_live(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response, "/livez").await
    }

    /// Storage and cache backends reported by the server.
    pub async fn health_info(&self) -> Result<HealthInfo> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, "/healthz").await
    }
}
