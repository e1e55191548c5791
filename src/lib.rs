pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod mvi;
pub mod store;
