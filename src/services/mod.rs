//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle search ranking, catalog mutations, and provisioning.
//! Single-query catalog reads stay in their handlers.

pub mod api_key_service;
pub mod job_title_service;
pub mod location_service;
