//! Type definitions for otfstats

mod error;
mod member;
mod workout;

pub use error::*;
pub use member::*;
pub use workout::*;

/// Open-ended JSON object as returned by the vendor API
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
