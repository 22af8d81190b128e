pub mod config;
pub mod demo;
pub mod error;
pub mod generator;
pub mod model;
pub mod prompts;
pub mod routes;
