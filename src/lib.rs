//! Mergington High School extracurricular activities API.
//!
//! The [`database::ActivityRegistry`] holds every activity and its
//! participants in memory; [`web::router`] exposes it over HTTP.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use database::ActivityRegistry;
pub use error::{ConfigError, ErrorKind, RegistryError};
