//! Infrastructure layer implementing the domain's storage contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
