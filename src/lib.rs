pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use db::MemoryStore;
