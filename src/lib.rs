pub mod api;
pub mod entities;
pub mod middleware;
pub mod pricing;
pub mod services;
