//! Domain aggregates produced and consumed by the admin console.

pub mod admin_user;
pub mod business_config;
pub mod negocio;
pub mod notification;
pub mod types;
