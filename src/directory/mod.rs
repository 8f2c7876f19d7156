//! # Directories
//!
//! The authoritative in-memory stores of the booking core. Each directory
//! owns its records outright and is mutated only through its public
//! operations; there is no shared global state and no locking. The design
//! assumes a single logical writer per directory at a time — an embedding
//! process that needs concurrent writers serializes them through one actor
//! or mutex per directory.
//!
//! - [`CustomerDirectory`]: identity assignment, insert validation, and the
//!   multi-term, ordered, cursor-paginated search engine.
//! - [`AppointmentDirectory`]: appointment storage, start-time range queries
//!   joined with customer records, and the pass-through seam for externally
//!   supplied available time slots.
//!
//! Nothing here persists across restarts; directories are constructed once
//! per process (or per test) and seeded explicitly.

pub mod appointments;
pub mod customers;

pub use appointments::AppointmentDirectory;
pub use customers::{CustomerDirectory, OrderBy, OrderDirection, SearchQuery};
