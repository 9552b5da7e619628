//! Core application primitives (poll loop, HTTP surface)

pub mod http;
pub mod poller;

pub use http::*;
pub use poller::*;
