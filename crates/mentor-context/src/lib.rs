//! Upstream context access for the mentor AI-tutoring backend.
//!
//! [`UpstreamClient`] implements the `ContextSource` trait from
//! `mentor-core` by issuing a single GraphQL query against the study-data
//! service, passing the caller's bearer token through unchanged.
//! [`stats::derive_stats`] turns a fetched context into the aggregate
//! numbers the recommendation prompts embed.

pub mod client;
pub mod stats;

pub use client::UpstreamClient;
pub use stats::derive_stats;

pub use mentor_core::{ContextSource, UserContext, UserStats};
