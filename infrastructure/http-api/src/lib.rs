pub mod auth_gateway;
pub mod catalog_gateway;
pub mod client;
pub mod config;
pub mod dto;
pub mod routes;

pub use auth_gateway::HttpAuthGateway;
pub use catalog_gateway::HttpCatalogGateway;
pub use client::ApiClient;
pub use config::ClientConfig;
