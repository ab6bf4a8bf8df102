pub mod chain;
pub mod config;
pub mod fetch;
pub mod pricing;
pub mod tokens;
pub mod writing;
