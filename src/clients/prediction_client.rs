//! Cliente HTTP del endpoint de predicción

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use super::PredictionSource;
use crate::config::ServiceConfig;
use crate::models::vehicle::{PredictionResult, VehicleQuery};
use crate::utils::errors::{ClientError, ClientResult};

/// Cliente de `POST /predict`
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    config: ServiceConfig,
}

impl PredictionClient {
    pub fn new(config: ServiceConfig) -> ClientResult<Self> {
        let client = config.build_http_client().map_err(ClientError::Transport)?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    /// Enviar el vehículo y obtener precio y tiempo estimados
    ///
    /// Un 422 significa que faltan campos y se devuelve como
    /// [`ClientError::Validation`] sin leer el cuerpo.
    pub async fn get_prediction_results(
        &self,
        query: &VehicleQuery,
    ) -> ClientResult<PredictionResult> {
        let url = self.config.predict_url();
        log::info!("🔮 POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(query)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        log::info!("📡 Response status: {}", status);

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            return Err(ClientError::Validation);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ Prediction failed with status {}: {}", status, body);
            return Err(ClientError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(ClientError::Decode)
    }
}

#[async_trait]
impl PredictionSource for PredictionClient {
    async fn get_prediction_results(&self, query: &VehicleQuery) -> ClientResult<PredictionResult> {
        PredictionClient::get_prediction_results(self, query).await
    }
}
