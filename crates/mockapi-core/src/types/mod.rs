//! Core domain types for fixtures, requests, and responses.

pub mod fixture;
pub mod request;
pub mod response;
