pub mod config;
pub mod rubifier;
pub mod utility;
