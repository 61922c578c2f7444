pub mod errors;
pub mod registry;
pub mod shutdown;
pub mod types;
