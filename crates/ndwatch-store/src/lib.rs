//! MAC-keyed host association store for IPv6 Neighbor Discovery monitoring.
//!
//! This crate is the identity-tracking core that the ndwatch detection
//! logic is built on: an owning set of observed MAC addresses where each
//! entry is either a bare membership marker or a heap-allocated host-state
//! record owned by the set.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   ND decoder    │     │     MacSet      │     │ detection logic │
//! │                 │     │                 │     │                 │
//! │  observed MAC   │────▶│ MAC ─▶ Marker   │◀────│ membership and  │
//! │  host state     │────▶│ MAC ─▶ Record   │     │ state queries,  │
//! │                 │     │   (set-owned)   │     │ full-set sweeps │
//! └─────────────────┘     └─────────────────┘     └─────────────────┘
//! ```
//!
//! The set is single-threaded, run-to-completion state: one capture loop
//! mutates and queries it per processed packet. Records handed to the set
//! are owned by it exclusively; references retrieved through queries are
//! borrows that cannot outlive the next mutating call.

pub mod error;
pub mod host;
pub mod macset;

pub use error::{Result, StoreError};
pub use host::{HostRecord, MacKeyed};
pub use macset::{Entry, Iter, MacSet, DEFAULT_EXPECTED_HOSTS};

pub use ndwatch_types::MacAddress;
