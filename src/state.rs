//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Solo contiene datos de lectura: cada
//! petición crea su propio `FormController`.

use std::sync::Arc;

use crate::clients::{OptionsClient, OptionsSource, PredictionClient, PredictionSource};
use crate::config::environment::EnvironmentConfig;
use crate::controllers::FormController;
use crate::utils::errors::{ClientError, ClientResult};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub options: Arc<dyn OptionsSource>,
    pub prediction: Arc<dyn PredictionSource>,
}

impl AppState {
    /// Crear el estado con los clientes HTTP reales, compartiendo un solo
    /// `reqwest::Client`
    pub fn new(config: EnvironmentConfig) -> ClientResult<Self> {
        let http_client = config
            .service
            .build_http_client()
            .map_err(ClientError::Transport)?;

        let options = OptionsClient::with_client(http_client.clone(), config.service.clone());
        let prediction = PredictionClient::with_client(http_client, config.service.clone());

        Ok(Self::with_sources(config, Arc::new(options), Arc::new(prediction)))
    }

    /// Crear el estado con fuentes arbitrarias (tests, otros backends)
    pub fn with_sources(
        config: EnvironmentConfig,
        options: Arc<dyn OptionsSource>,
        prediction: Arc<dyn PredictionSource>,
    ) -> Self {
        Self {
            config,
            options,
            prediction,
        }
    }

    /// Nueva sesión de formulario para una petición
    pub fn form_controller(&self) -> FormController {
        FormController::new(Arc::clone(&self.options), Arc::clone(&self.prediction))
    }
}
