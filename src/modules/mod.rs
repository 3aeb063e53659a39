//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the durable report collection and photo blobs.

pub mod storage;
