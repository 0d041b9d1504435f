pub mod types;

pub use types::PlagcheckError;
