//! Vitals Core — health-store abstraction for the metrics screen.
//!
//! This crate contains everything below the UI:
//! - Domain types (quantity samples, workouts, sleep samples, records)
//! - The `HealthStore` capability trait with structured errors
//! - An insertion-ordered in-memory store implementation
//! - A deterministic demo-data generator

pub mod domain;
pub mod sample_data;
pub mod store;
