//! Sistema de manejo de errores
//!
//! Este módulo define los errores de los clientes HTTP del servicio remoto
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::option::OptionCategory;

/// Mensaje que ve el usuario cuando el servicio responde 422
pub const FILL_ALL_DATA_MESSAGE: &str = "Please fill all the data";

/// Errores de los clientes del servicio remoto de opciones y predicción
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Remote fetch error for {url}: {source}")]
    RemoteFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Please fill all the data")]
    Validation,

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Remote service answered {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Unknown option category: {0}")]
    UnknownCategory(String),

    #[error("Category {0} needs a parent selection")]
    MissingParent(OptionCategory),
}

impl ClientError {
    /// Indica si el error es el 422 de "faltan datos"
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation)
    }
}

/// Resultado de las llamadas al servicio remoto
pub type ClientResult<T> = Result<T, ClientError>;

/// Errores principales de la aplicación web
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] ClientError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AppError::Upstream(ClientError::Validation) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error",
                "VALIDATION_ERROR",
            ),
            AppError::Upstream(ClientError::UnknownCategory(_)) => {
                (StatusCode::NOT_FOUND, "Not Found", "UNKNOWN_CATEGORY")
            }
            AppError::Upstream(ClientError::MissingParent(_)) => {
                (StatusCode::BAD_REQUEST, "Bad Request", "MISSING_PARENT")
            }
            AppError::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                "External API Error",
                "EXTERNAL_API_ERROR",
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "INTERNAL_ERROR",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code) = self.parts();

        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::warn!("⚠️ {}", self);
        }

        let message = match &self {
            AppError::Upstream(e) => e.to_string(),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
