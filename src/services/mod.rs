//! Services for talking to the member API and aggregating workouts

pub mod aggregator;
pub mod auth;
pub mod client;
mod http;
pub mod member;
pub mod normalizer;
pub mod workouts;

pub use aggregator::Aggregator;
pub use client::OtfClient;
pub use normalizer::{coach_first_name, sanitize_attribute_name};
pub use workouts::InStudioWorkouts;
