//! Car price estimator
//!
//! Formulario web para describir un vehículo, enviarlo al servicio remoto
//! de predicción y mostrar el precio y el tiempo estimados.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_app;
pub use state::AppState;
