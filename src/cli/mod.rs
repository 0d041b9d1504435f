pub mod commands;
pub mod compare;
pub mod serve;
pub mod validate;

pub use commands::{Cli, Commands};
