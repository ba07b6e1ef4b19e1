pub mod app;
pub mod config;
pub mod db;
pub mod environment;
pub mod journal;
pub mod models;
pub mod pain;
pub mod report;
pub mod store;
