pub mod config;
pub mod diag;
pub mod server;
pub mod startup;
pub mod utils;
