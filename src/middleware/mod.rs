//! Middleware del servidor web

pub mod cors;
