//! Shortmap - the mapping engine of a URL shortener
//!
//! This library provides the core mapping logic a URL shortener service
//! is built on: randomized short code generation, idempotent shortening
//! (the same URL always reuses its existing code), click-counted
//! resolution and the in-memory store backing all of it.
//!
//! Transport and presentation are deliberately out of scope; a host
//! service wires these operations to its own HTTP routes or UI.
//!
//! # Architecture
//! - `storages`: the `Storage` backend trait and the in-memory backend
//! - `services`: `MappingService`, the business logic over a backend
//! - `utils`: short code generation and URL validation
//! - `config`: environment-derived tuning knobs
//! - `errors`: the crate error type
//! - `logging`: tracing subscriber setup for host binaries

pub mod config;
pub mod errors;
pub mod logging;
pub mod services;
pub mod storages;
pub mod utils;
