//! Core library exports for the Inspire India Talks site.
//!
//! The `data` feature exposes the catalog layer (domain types, catalog
//! records, the in-memory repository, DTOs and form validation). The `server`
//! feature adds the relay client, services and Actix-web routes.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;

#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod relay;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
