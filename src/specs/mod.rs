// src/specs/mod.rs
//! # Page specs
//!
//! Where the data lives on the site and how to read it.
//!
//! - `profile` builds the person page URL and fetches it.
//! - `filmography` turns the fetched HTML into an [`ActorRecord`].
//!
//! Specs only extract. Provisioning, prompting and exporting live elsewhere
//! (`reference`, `prompt`, `file`), wired together by `runner`.
//!
//! ## Conventions
//! - Parsing is pure: `&str` in, `Result` out, no I/O. Tests run offline
//!   against inline snippets and `tests/fixtures/profile.html`.
//! - Every markup assumption sits in one small function with a documented
//!   contract. When the site changes, one of those tests should break loudly
//!   instead of the export silently filling with garbage.
//! - Missing markup is an error naming the missing piece. Nothing is guessed.
//!
//! [`ActorRecord`]: crate::data::ActorRecord
pub mod filmography;
pub mod profile;
