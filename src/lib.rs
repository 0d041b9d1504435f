pub mod cli;
pub mod config;
pub mod errors;
pub mod similarity;
pub mod web;
