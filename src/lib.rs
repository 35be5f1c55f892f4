pub mod commands;
pub mod config;
pub mod fs;
pub mod logging;
pub mod models;
pub mod render;
pub mod validation;
pub mod viewer;
pub mod workflow;
