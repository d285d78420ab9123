//! Configuración del servicio remoto de opciones y predicción

use std::time::Duration;
use crate::models::option::{OptionCategory, OptionId};

/// Rutas de cada endpoint, relativas a la URL base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub make_options: String,
    pub model_options: String,
    pub transmission_options: String,
    pub fuel_type_options: String,
    pub body_style_options: String,
    pub color_options: String,
    pub car_option_options: String,
    pub damage_options: String,
    pub predict: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            make_options: "make-options".to_string(),
            model_options: "model-options".to_string(),
            transmission_options: "transmission-options".to_string(),
            fuel_type_options: "fuel-type-options".to_string(),
            body_style_options: "body-style-options".to_string(),
            color_options: "color-options".to_string(),
            car_option_options: "car-option-options".to_string(),
            damage_options: "damage-options".to_string(),
            predict: "predict".to_string(),
        }
    }
}

impl ServiceEndpoints {
    /// Ruta de la lista de opciones de una categoría
    pub fn options_path(&self, category: OptionCategory) -> &str {
        match category {
            OptionCategory::Make => &self.make_options,
            OptionCategory::Model => &self.model_options,
            OptionCategory::Transmission => &self.transmission_options,
            OptionCategory::FuelType => &self.fuel_type_options,
            OptionCategory::BodyStyle => &self.body_style_options,
            OptionCategory::Color => &self.color_options,
            OptionCategory::CarOption => &self.car_option_options,
            OptionCategory::Damage => &self.damage_options,
        }
    }
}

/// URL base + rutas + timeout opcional, pasado explícitamente a cada cliente
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub endpoints: ServiceEndpoints,
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoints: ServiceEndpoints::default(),
            timeout: None,
        }
    }

    pub fn with_endpoints(mut self, endpoints: ServiceEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Unir la URL base con una ruta, con o sin `/` final en la base
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn options_url(&self, category: OptionCategory) -> String {
        self.url(self.endpoints.options_path(category))
    }

    pub fn model_options_url(&self, make_id: OptionId) -> String {
        self.url(&format!("{}/{}", self.endpoints.model_options, make_id))
    }

    pub fn predict_url(&self) -> String {
        self.url(&self.endpoints.predict)
    }

    /// Construir el cliente reqwest; sin timeout salvo que se configure uno
    pub fn build_http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_with_and_without_trailing_slash() {
        let with_slash = ServiceConfig::new("http://localhost:8008/");
        let without_slash = ServiceConfig::new("http://localhost:8008");

        assert_eq!(with_slash.predict_url(), "http://localhost:8008/predict");
        assert_eq!(without_slash.predict_url(), "http://localhost:8008/predict");
        assert_eq!(
            with_slash.options_url(OptionCategory::FuelType),
            "http://localhost:8008/fuel-type-options"
        );
        assert_eq!(
            with_slash.model_options_url(7),
            "http://localhost:8008/model-options/7"
        );
    }

    #[test]
    fn test_custom_endpoints() {
        let endpoints = ServiceEndpoints {
            predict: "v2/predict".to_string(),
            ..Default::default()
        };
        let config = ServiceConfig::new("http://api.test/base/").with_endpoints(endpoints);
        assert_eq!(config.predict_url(), "http://api.test/base/v2/predict");
    }
}
