#[macro_use]
extern crate lazy_static;

pub mod batch;
pub mod cli_config;
pub mod common;
pub mod config;
pub mod logger;
pub mod validators;
