pub mod api;
pub mod api_docs;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod server;
