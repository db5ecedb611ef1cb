//! Route handlers
//!
//! HTML pages, the JSON API and health probes.

pub mod api;
pub mod health;
pub mod pages;
