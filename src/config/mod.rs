//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración del
//! servicio remoto de opciones y predicción.

pub mod environment;
pub mod service;

pub use environment::*;
pub use service::{ServiceConfig, ServiceEndpoints};
