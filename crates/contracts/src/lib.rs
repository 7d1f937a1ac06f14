//! Shared contracts between the INVEXA admin frontend and the backend REST API.
//!
//! Everything here mirrors the JSON the backend speaks (MongoDB-style `_id`
//! identifiers, camelCase field names). Pure domain logic that both sides of
//! a screen need (stock classification, discount tier editing) lives next to
//! the DTOs it operates on.

pub mod analytics;
pub mod domain;
pub mod shared;
pub mod system;
