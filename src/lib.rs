//! Orangetheory class history stats
//!
//! Logs in to the member API, fetches the member record and in-studio
//! workout history, and counts classes by coach, studio and class type.

pub mod config;
pub mod services;
pub mod types;
