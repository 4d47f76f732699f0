//! DataCerta Core Library
//!
//! Expiration-tracking engine for multi-tenant retail stock: classifies
//! batches into status buckets by days-to-expiration, produces filtered and
//! paginated dashboard views, aggregates per-category and per-store
//! summaries, records losses, and exports delimited snapshots.
//!
//! The classification/view path (`services::classifier`,
//! `services::stock_view`, `services::summaries`, `services::export`) is
//! pure: it reads a snapshot and a [`FilterState`] and derives everything
//! fresh against one reference date per pass. Persistence sits behind the
//! [`snapshot::SnapshotProvider`] seam; [`snapshot::memory`] supplies the
//! offline backend.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod services;
pub mod snapshot;

pub use errors::ServiceError;
pub use models::{ExpiryPolicy, FilterState, LossRecord, StatusClass, StatusCounts, StockRecord, ViewResult};
pub use services::stock_view::evaluate;
