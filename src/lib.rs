//! Stallboard core
//!
//! Order and checklist tracking for a food stall: reusable dish templates
//! with required preparation steps and priced add-ons, per-customer orders
//! with a running total, persisted as a single JSON document in a
//! key-value document store.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod services;
pub mod store;
