//! BTC Price Export Backend Library
//!
//! Read-only HTTP facade over the `btc_prices` table:
//! - `GET /btc.csv` streams the table as CSV, one chunk per row
//! - `GET /btc.json` returns the table as a single JSON array
//!
//! The database is reached through a lazily initialized connection pool
//! built from the `DATABASE_URL` environment variable.

pub mod api;
pub mod db;
pub mod models;
pub mod schema;
pub mod services;
