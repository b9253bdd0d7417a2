pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod domain;
pub mod logging;
pub mod server;
pub mod store;
pub mod validation;
