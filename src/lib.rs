#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod level;
pub mod logging;
pub mod present;
pub mod sample;
pub mod store;
pub mod weekly;
