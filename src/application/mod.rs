//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! cache calls. Services consume trait objects and provide a clean API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registrar::LinkRegistrar`] - Short link creation
//! - [`services::resolver::RedirectResolver`] - Cache-aside redirect resolution

pub mod services;
