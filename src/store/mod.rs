//! Hosted table client module

mod client;
mod error;
mod traits;

pub use client::RestStore;
pub use error::StoreError;
pub use traits::RecordStore;

#[cfg(test)]
pub use traits::MockRecordStore;
