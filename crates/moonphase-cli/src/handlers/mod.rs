pub mod calc;
pub mod classify;
pub mod config;
