//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the document store and the image storage client.

pub mod storage;
pub mod store;
