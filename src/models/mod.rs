//! Modelos del sistema
//!
//! Este módulo contiene las opciones de los desplegables, la consulta y la
//! predicción del vehículo, y el view-model del formulario.

pub mod form;
pub mod option;
pub mod vehicle;
