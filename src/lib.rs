pub mod app;
pub mod cli;
pub mod document;
pub mod error;
pub mod logging;
pub mod settings;
