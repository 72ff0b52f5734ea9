//! # platforge_server
//!
//! HTTP API for PlatForge.
//!
//! Exposes the template engine over axum: preview endpoints return the
//! generated file list as JSON, download endpoints return a zip archive.
//! The platform endpoints compose a terraform and a helm generation into
//! one response, resolving per-cloud template defaults.

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use config::ServerConfig;
pub use error::ApiError;
