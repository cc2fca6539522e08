pub mod config;
pub mod extractors;
pub mod http;
pub mod repositories;
