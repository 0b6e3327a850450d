pub mod config;
pub mod describe;
pub mod error;
pub mod record;
