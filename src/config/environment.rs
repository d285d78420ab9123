//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: dónde escucha el
//! servidor web y dónde vive el servicio remoto de predicción.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use super::service::ServiceConfig;

/// URL por defecto del servicio de predicción (FastAPI local)
pub const DEFAULT_PREDICTOR_BASE_URL: &str = "http://localhost:8008/";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub service: ServiceConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            service: ServiceConfig::new(DEFAULT_PREDICTOR_BASE_URL),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno, usando los valores por defecto
    /// para lo que no esté definido
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", port))?,
            Err(_) => defaults.port,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        let base_url = env::var("PREDICTOR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PREDICTOR_BASE_URL.to_string());

        let mut service = ServiceConfig::new(base_url);
        if let Ok(secs) = env::var("PREDICTOR_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().with_context(|| {
                format!("PREDICTOR_TIMEOUT_SECS must be a valid number, got '{}'", secs)
            })?;
            service = service.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins,
            service,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
