// src/lib.rs
//! IMDb filmography scraper.
//!
//! provision reference data → validate actor id → fetch profile page →
//! extract [`data::ActorRecord`] → export JSON + XLSX.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod file;
pub mod json;
pub mod logger;
pub mod progress;
pub mod prompt;
pub mod reference;
pub mod runner;
pub mod specs;
pub mod xlsx;
