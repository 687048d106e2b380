//! Client settings and fixture file loading.

pub mod error;
pub mod parser;
pub mod settings;
