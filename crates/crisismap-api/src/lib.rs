//! Crisismap API
//!
//! Axum application for the disaster-report service: one submission endpoint,
//! one listing endpoint, and a health check.

pub mod error;
pub mod handlers;
pub mod multipart;
pub mod setup;
pub mod state;
pub mod telemetry;
