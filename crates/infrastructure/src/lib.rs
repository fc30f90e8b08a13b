//! Zonekeeper Infrastructure Layer
//!
//! In-memory adapters for the application ports. Nothing here is durable:
//! the zone store is seeded at startup and dropped at exit.
pub mod audit;
pub mod auth;
pub mod repositories;
pub mod simulation;
