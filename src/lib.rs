//! Admin console client for the business directory backend.
//!
//! With only the `data` feature the crate exposes the domain, DTO and form
//! layers. The default `client` feature adds the REST repository, the paged
//! query controller, the services and the console binary.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "client")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod notices;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "client")]
pub mod query;
#[cfg(feature = "client")]
pub mod repository;
#[cfg(feature = "client")]
pub mod services;
