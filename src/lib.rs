pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod jobs;
pub mod scrape;

pub use config::AppConfig;
pub use error::MapperError;
