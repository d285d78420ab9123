//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, limpieza de
//! campos y formato de números.

pub mod errors;
pub mod format;
pub mod validation;
