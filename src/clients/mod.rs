//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for the remote options / prediction
//! service, and the traits the form controller depends on.

pub mod options_client;
pub mod prediction_client;

use async_trait::async_trait;

use crate::models::option::{OptionCategory, OptionId, SelectOption};
use crate::models::vehicle::{PredictionResult, VehicleQuery};
use crate::utils::errors::{ClientError, ClientResult};

pub use options_client::OptionsClient;
pub use prediction_client::PredictionClient;

/// Fuente de listas de opciones para los desplegables
#[async_trait]
pub trait OptionsSource: Send + Sync {
    /// Lista de una categoría estática; `Model` necesita una marca
    async fn get_options(&self, category: OptionCategory) -> ClientResult<Vec<SelectOption>>;

    /// Modelos de la marca indicada
    async fn get_model_options(&self, make_id: OptionId) -> ClientResult<Vec<SelectOption>>;

    /// Opciones a partir del id del `<select>` (`make-select`, `color-select`, ...)
    async fn get_options_by_select_id(&self, select_id: &str) -> ClientResult<Vec<SelectOption>> {
        let category = OptionCategory::from_select_id(select_id)
            .ok_or_else(|| ClientError::UnknownCategory(select_id.to_string()))?;
        self.get_options(category).await
    }
}

/// Fuente de predicciones de precio y tiempo
#[async_trait]
pub trait PredictionSource: Send + Sync {
    async fn get_prediction_results(&self, query: &VehicleQuery) -> ClientResult<PredictionResult>;
}
