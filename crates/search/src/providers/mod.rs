//! Search backend implementations.

pub mod http;
pub mod local;

pub use http::HttpSearchBackend;
pub use local::{LocalEntry, LocalSearchBackend};
