//! Cliente HTTP de listas de opciones
//!
//! Cada llamada es una petición nueva: sin reintentos ni cache.

use async_trait::async_trait;
use reqwest::Client;

use super::OptionsSource;
use crate::config::ServiceConfig;
use crate::models::option::{OptionCategory, OptionId, SelectOption};
use crate::utils::errors::{ClientError, ClientResult};

/// Cliente de las listas `{id, name}` del servicio remoto
#[derive(Debug, Clone)]
pub struct OptionsClient {
    client: Client,
    config: ServiceConfig,
}

impl OptionsClient {
    /// Crear el cliente con la configuración del servicio
    pub fn new(config: ServiceConfig) -> ClientResult<Self> {
        let client = config.build_http_client().map_err(ClientError::Transport)?;
        Ok(Self { client, config })
    }

    /// Reutilizar un `reqwest::Client` ya construido
    pub fn with_client(client: Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    pub async fn get_make_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::Make)).await
    }

    pub async fn get_transmission_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::Transmission)).await
    }

    pub async fn get_fuel_type_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::FuelType)).await
    }

    pub async fn get_body_style_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::BodyStyle)).await
    }

    pub async fn get_color_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::Color)).await
    }

    pub async fn get_car_option_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::CarOption)).await
    }

    pub async fn get_damage_options(&self) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.options_url(OptionCategory::Damage)).await
    }

    /// Modelos de una marca concreta
    pub async fn get_model_options(&self, make_id: OptionId) -> ClientResult<Vec<SelectOption>> {
        self.fetch_list(self.config.model_options_url(make_id)).await
    }

    async fn fetch_list(&self, url: String) -> ClientResult<Vec<SelectOption>> {
        log::info!("🌐 GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(ClientError::RemoteFetch { url, source }),
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(source) => {
                log::error!("❌ {} respondió {:?}", url, source.status());
                return Err(ClientError::RemoteFetch { url, source });
            }
        };

        match response.json::<Vec<SelectOption>>().await {
            Ok(options) => {
                log::debug!("📋 {} opciones recibidas de {}", options.len(), url);
                Ok(options)
            }
            Err(source) => Err(ClientError::RemoteFetch { url, source }),
        }
    }
}

#[async_trait]
impl OptionsSource for OptionsClient {
    async fn get_options(&self, category: OptionCategory) -> ClientResult<Vec<SelectOption>> {
        match category {
            OptionCategory::Make => self.get_make_options().await,
            OptionCategory::Transmission => self.get_transmission_options().await,
            OptionCategory::FuelType => self.get_fuel_type_options().await,
            OptionCategory::BodyStyle => self.get_body_style_options().await,
            OptionCategory::Color => self.get_color_options().await,
            OptionCategory::CarOption => self.get_car_option_options().await,
            OptionCategory::Damage => self.get_damage_options().await,
            OptionCategory::Model => Err(ClientError::MissingParent(category)),
        }
    }

    async fn get_model_options(&self, make_id: OptionId) -> ClientResult<Vec<SelectOption>> {
        OptionsClient::get_model_options(self, make_id).await
    }
}
