// Middleware modules for the Phish-Sense API

pub mod cors;

pub use cors::cors_middleware;
