pub mod config;
pub mod errors;
pub mod helpers;
pub mod pagination;
pub mod request;
pub mod types;
