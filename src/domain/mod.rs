//! Domain sub-clients, one per API namespace.

pub mod identity;
pub mod lists;
pub mod newsletter;
pub mod recipients;
pub mod schedule;
