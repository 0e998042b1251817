pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod physics;
pub mod pipeline;
pub mod report;
pub mod tle;
