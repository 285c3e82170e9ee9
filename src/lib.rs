//! Fetch-and-clean pipeline for the Montgomery County crime-incident
//! dataset: one bounded anonymous read from the open-data portal, one
//! cleaning pass, and a typed in-memory table out the other side.

pub mod apis;
pub mod cleaner;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
