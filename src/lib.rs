pub mod args;
pub mod cli;
pub mod dataset;
pub mod logging;
pub mod mapping;
pub mod projection;
pub mod schema;
pub mod terminal;
