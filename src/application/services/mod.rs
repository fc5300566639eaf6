//! Business logic services for the application layer.

pub mod registrar;
pub mod resolver;

pub use registrar::LinkRegistrar;
pub use resolver::RedirectResolver;
