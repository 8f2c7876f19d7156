//! # Salonapp Architecture
//!
//! Salonapp is a **UI-agnostic booking library**: the domain core of a salon
//! appointment system. The HTTP/GraphQL layer, form rendering and page
//! navigation live elsewhere and are clients of this crate.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (excluded)                                 │
//! │  - HTTP/GraphQL endpoints, status codes, markup             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                        │
//! │  - One method per wire endpoint                             │
//! │  - Returns structured Result types, never performs I/O      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Directories (directory/)                                   │
//! │  - CustomerDirectory: identity, validation, paginated search│
//! │  - AppointmentDirectory: storage, range queries, slot seam  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pure modules (slots, availability, validation)             │
//! │  - No state, no I/O; plain functions over plain values      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! Every operation takes regular Rust arguments and returns regular Rust
//! types. Validation failures are values (a field→message map), never
//! panics; nothing here writes to stdout, opens sockets, or exits the
//! process. The same core can sit behind a REST server, a GraphQL schema,
//! or a test harness.
//!
//! ## Concurrency Model
//!
//! The core is synchronous and single-threaded: one logical writer per
//! directory at a time, no internal locking. Search cursors are best-effort,
//! not snapshot-isolated; inserting between two pages of the same query may
//! shift membership, and a vanished cursor silently resets to page one.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade the transport layer calls
//! - [`directory`]: Customer and appointment stores
//! - [`slots`]: The weekly grid of bookable instants
//! - [`availability`]: Stylist/service slot narrowing
//! - [`validation`]: Composable field validators and the error map
//! - [`config`]: Salon opening hours, services and stylists
//! - [`sample`]: Seedable fake-data generators for demos and tests
//! - [`model`]: Core data types
//! - [`error`]: Error types

pub mod api;
pub mod availability;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod sample;
pub mod slots;
pub mod validation;

pub use api::SalonApi;
pub use config::SalonConfig;
pub use directory::{AppointmentDirectory, CustomerDirectory, SearchQuery};
pub use error::{Result, SalonError};
pub use model::{
    Appointment, AppointmentView, AvailableTimeSlot, Customer, CustomerId, CustomerRecord,
};
