pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod search_client;
pub mod skills;
pub mod state;
pub mod view;
