//! HTTP handlers for SampleData CRUD, health, and deployment info.

pub mod data;
pub mod health;
