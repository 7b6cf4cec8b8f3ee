// src/core/mod.rs

pub mod net;
pub mod retry;

pub use retry::RetryPolicy;
