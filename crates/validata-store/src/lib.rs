//! Persistent storage for Validata datasets and validation history.
//!
//! Raw dataset bytes are written once; validation records for a dataset
//! accumulate in an append-only history ordered by creation time. The
//! engine never sees this crate: callers pass tables in and records out.

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::Store;
